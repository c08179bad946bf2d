//! Per-page `<head>` tags: title, meta description/keywords/robots, canonical link, Open Graph
//! and Twitter Card tags.
//!
//! Rendering is two steps. [`resolve_head`] fills in every value a page leaves unset from the
//! site-wide [`SeoConfig`]; [`render_head`] turns the result into HTML, one tag per line.

use data_model_seo::{PageMeta, SeoConfig};
use quick_xml::escape::escape;

use crate::sitemap::join_url;

/// Open Graph object type of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageType {
    #[default]
    Website,
    Article,
    Product,
    Profile,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
            Self::Product => "product",
            Self::Profile => "profile",
        }
    }
}

/// What a single page wants in its head. Anything left unset falls back to the site defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSeo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub canonical: Option<String>,
    /// Site-relative path, used to derive the canonical URL.
    pub path: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub page_type: PageType,
    pub author: Option<String>,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub locale: Option<String>,
    pub site_name: Option<String>,
    pub twitter_handle: Option<String>,
    pub no_index: bool,
    pub no_follow: bool,
}

impl From<&PageMeta> for PageSeo {
    fn from(page: &PageMeta) -> Self {
        Self {
            title: Some(page.title.clone()),
            description: Some(page.description.clone()),
            keywords: page.keywords.clone(),
            path: Some(page.path.clone()),
            ..Self::default()
        }
    }
}

/// A page's head with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHead {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub robots: String,
    pub canonical: String,
    pub image: String,
    pub image_alt: String,
    pub page_type: PageType,
    pub site_name: String,
    pub locale: String,
    /// Page language: the locale up to the first `_`. Rendered as `content-language`.
    pub lang: String,
    pub twitter_handle: String,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
}

/// Applies the site template to a page title.
///
/// Titles that already contain `|` are taken as final.
///
/// # Examples
///
/// ```
/// # use core_seo::head::full_title;
/// assert_eq!(full_title("%s | Nexxt Group", "Default", Some("Careers")), "Careers | Nexxt Group");
/// assert_eq!(full_title("%s | Nexxt Group", "Default", Some("A | B")), "A | B");
/// assert_eq!(full_title("%s | Nexxt Group", "Default", None), "Default");
/// ```
pub fn full_title(template: &str, default_title: &str, title: Option<&str>) -> String {
    match title {
        Some(t) if t.contains('|') => t.to_string(),
        Some(t) => template.replace("%s", t),
        None => default_title.to_string(),
    }
}

/// Builds the robots meta value from the page's opt-outs.
pub fn robots_directive(no_index: bool, no_follow: bool) -> String {
    let mut directives = Vec::new();
    if no_index {
        directives.push("noindex");
    }
    if no_follow {
        directives.push("nofollow");
    }
    if directives.is_empty() {
        directives.extend(["index", "follow"]);
    }
    directives.join(", ")
}

fn or_default(value: &Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.clone(),
        _ => default.to_string(),
    }
}

/// Fills in every value `page` leaves unset from `config`.
pub fn resolve_head(config: &SeoConfig, page: &PageSeo) -> ResolvedHead {
    let locale = or_default(&page.locale, &config.locale);
    let lang = locale.split('_').next().unwrap_or_default().to_string();
    let canonical = match &page.canonical {
        Some(canonical) if !canonical.is_empty() => canonical.clone(),
        _ => join_url(&config.site_url, page.path.as_deref().unwrap_or("/")),
    };
    let keywords = if page.keywords.is_empty() {
        config.default_keywords.clone()
    } else {
        page.keywords.clone()
    };

    ResolvedHead {
        title: full_title(&config.title_template, &config.default_title, page.title.as_deref()),
        description: or_default(&page.description, &config.default_description),
        keywords,
        author: or_default(&page.author, &config.author),
        robots: robots_directive(page.no_index, page.no_follow),
        canonical,
        image: or_default(&page.image, &config.default_image),
        image_alt: or_default(&page.image_alt, &config.default_image_alt),
        page_type: page.page_type,
        site_name: or_default(&page.site_name, &config.site_name),
        locale,
        lang,
        twitter_handle: or_default(&page.twitter_handle, &config.twitter_handle),
        published_time: page.published_time.clone(),
        modified_time: page.modified_time.clone(),
    }
}

enum Tag {
    Title(String),
    Name(&'static str, String),
    HttpEquiv(&'static str, String),
    Property(&'static str, String),
    Link(&'static str, String),
}

impl Tag {
    fn render(&self) -> Option<String> {
        let (attr, key, value) = match self {
            Tag::Title(title) => return Some(format!("<title>{}</title>", escape(title.as_str()))),
            Tag::Name(name, content) => ("name", *name, content),
            Tag::HttpEquiv(header, content) => ("http-equiv", *header, content),
            Tag::Property(property, content) => ("property", *property, content),
            Tag::Link(rel, href) => {
                if href.is_empty() {
                    return None;
                }
                return Some(format!(r#"<link rel="{}" href="{}">"#, rel, escape(href.as_str())));
            }
        };
        if value.is_empty() {
            return None;
        }
        Some(format!(r#"<meta {}="{}" content="{}">"#, attr, key, escape(value.as_str())))
    }
}

/// Renders the head tags, one per line. Tags with empty values are left out.
pub fn render_head(head: &ResolvedHead) -> String {
    let mut tags = vec![
        Tag::Title(head.title.clone()),
        Tag::Name("description", head.description.clone()),
        Tag::Name("keywords", head.keywords.join(", ")),
        Tag::Name("author", head.author.clone()),
        Tag::Name("robots", head.robots.clone()),
        Tag::HttpEquiv("content-language", head.lang.clone()),
        Tag::Link("canonical", head.canonical.clone()),
        Tag::Property("og:title", head.title.clone()),
        Tag::Property("og:description", head.description.clone()),
        Tag::Property("og:image", head.image.clone()),
        Tag::Property("og:image:alt", head.image_alt.clone()),
        Tag::Property("og:url", head.canonical.clone()),
        Tag::Property("og:type", head.page_type.as_str().to_string()),
        Tag::Property("og:site_name", head.site_name.clone()),
        Tag::Property("og:locale", head.locale.clone()),
    ];

    if head.page_type == PageType::Article {
        if let Some(published) = &head.published_time {
            tags.push(Tag::Property("article:published_time", published.clone()));
        }
        if let Some(modified) = &head.modified_time {
            tags.push(Tag::Property("article:modified_time", modified.clone()));
        }
        tags.push(Tag::Property("article:author", head.author.clone()));
    }

    tags.extend([
        Tag::Name("twitter:card", "summary_large_image".to_string()),
        Tag::Name("twitter:site", head.twitter_handle.clone()),
        Tag::Name("twitter:creator", head.twitter_handle.clone()),
        Tag::Name("twitter:title", head.title.clone()),
        Tag::Name("twitter:description", head.description.clone()),
        Tag::Name("twitter:image", head.image.clone()),
        Tag::Name("twitter:image:alt", head.image_alt.clone()),
        Tag::Name("theme-color", "#000000".to_string()),
        Tag::Name("msapplication-TileColor", "#000000".to_string()),
        Tag::Name("viewport", "width=device-width, initial-scale=1.0".to_string()),
    ]);

    let mut html = tags.iter().filter_map(Tag::render).collect::<Vec<_>>().join("\n");
    html.push('\n');
    html
}
