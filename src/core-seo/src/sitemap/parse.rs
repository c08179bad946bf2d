//! Sitemap parsing, used to check generated (or hand-written) sitemap files.

use data_model_seo::{ChangeFrequency, Priority};
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::errors::{Result, SeoError};

/// Represents a sitemap with URLs and their optional hints.
#[derive(Debug, Clone)]
pub struct Sitemap {
    /// List of URLs from the sitemap
    pub urls: Vec<SitemapUrl>,
}

/// Represents a single URL entry in a sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    /// The URL location
    pub loc: String,
    /// Optional last modification date, verbatim
    pub lastmod: Option<String>,
    pub changefreq: Option<ChangeFrequency>,
    pub priority: Option<Priority>,
}

impl Sitemap {
    /// Returns a simple list of URL strings.
    pub fn sites(&self) -> Vec<String> {
        self.urls.iter().map(|u| u.loc.clone()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Loc,
    Lastmod,
    Changefreq,
    Priority,
}

#[derive(Debug, Default)]
struct PartialUrl {
    loc: Option<String>,
    lastmod: Option<String>,
    changefreq: Option<ChangeFrequency>,
    priority: Option<Priority>,
}

/// Parses XML sitemap content into a Sitemap struct.
///
/// Supports XML sitemaps in the standard format:
/// ```xml
/// <urlset>
///   <url>
///     <loc>https://example.com/page</loc>
///     <lastmod>2024-01-01</lastmod>
///     <changefreq>monthly</changefreq>
///     <priority>0.8</priority>
///   </url>
/// </urlset>
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The sitemap XML is malformed
/// - A `<loc>` is not an absolute URL
/// - A `<changefreq>` or `<priority>` value is not valid
/// - No URLs are found in the sitemap
pub fn parse_sitemap(xml: &str) -> Result<Sitemap> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut current: Option<PartialUrl> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"url" => current = Some(PartialUrl::default()),
                b"loc" => field = Some(Field::Loc),
                b"lastmod" => field = Some(Field::Lastmod),
                b"changefreq" => field = Some(Field::Changefreq),
                b"priority" => field = Some(Field::Priority),
                _ => field = None,
            },
            Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == b"url" {
                    urls.push(finish_url(PartialUrl::default())?);
                }
            }
            Ok(Event::Text(text)) => {
                if let (Some(url), Some(f)) = (current.as_mut(), field) {
                    let value = text
                        .unescape()
                        .map_err(|e| SeoError::SitemapError(format!("Invalid XML: {}", e)))?
                        .trim()
                        .to_string();
                    set_field(url, f, value)?;
                }
            }
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == b"url" {
                    // End of URL entry, save it
                    if let Some(url) = current.take() {
                        urls.push(finish_url(url)?);
                    }
                }
                field = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(SeoError::SitemapError(format!("XML parsing error: {}", e))),
            _ => {}
        }
    }

    if urls.is_empty() {
        return Err(SeoError::SitemapError("No URLs found in sitemap".to_string()));
    }

    Ok(Sitemap { urls })
}

fn set_field(url: &mut PartialUrl, field: Field, value: String) -> Result<()> {
    match field {
        Field::Loc => url.loc = Some(value),
        Field::Lastmod => url.lastmod = Some(value),
        Field::Changefreq => url.changefreq = Some(value.parse()?),
        Field::Priority => {
            let priority: f64 = value
                .parse()
                .map_err(|_| SeoError::SitemapError(format!("Priority is not a number: '{}'", value)))?;
            url.priority = Some(Priority::new(priority)?);
        }
    }
    Ok(())
}

fn finish_url(url: PartialUrl) -> Result<SitemapUrl> {
    let loc = url
        .loc
        .ok_or_else(|| SeoError::SitemapError("<url> entry without a <loc>".to_string()))?;
    url::Url::parse(&loc).map_err(|e| SeoError::SitemapError(format!("Not an absolute URL '{}': {}", loc, e)))?;
    Ok(SitemapUrl {
        loc,
        lastmod: url.lastmod,
        changefreq: url.changefreq,
        priority: url.priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sitemap() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://example.com/page1</loc>
    <lastmod>2024-01-01</lastmod>
    <changefreq>weekly</changefreq>
    <priority>0.7</priority>
  </url>
  <url>
    <loc>https://example.com/page2</loc>
  </url>
</urlset>"#;

        let sitemap = parse_sitemap(xml).unwrap();
        assert_eq!(sitemap.urls.len(), 2);
        assert_eq!(sitemap.urls[0].loc, "https://example.com/page1");
        assert_eq!(sitemap.urls[0].lastmod, Some("2024-01-01".to_string()));
        assert_eq!(sitemap.urls[0].changefreq, Some(ChangeFrequency::Weekly));
        assert_eq!(sitemap.urls[0].priority, Some(Priority::saturating_from_tenths(7)));
        assert_eq!(sitemap.urls[1].loc, "https://example.com/page2");
        assert_eq!(sitemap.urls[1].lastmod, None);
        assert_eq!(sitemap.urls[1].priority, None);
    }

    #[test]
    fn test_parse_sitemap_unescapes_loc() {
        let xml = r#"<urlset><url><loc>https://example.com/?a=1&amp;b=2</loc></url></urlset>"#;
        let sitemap = parse_sitemap(xml).unwrap();
        assert_eq!(sitemap.sites(), vec!["https://example.com/?a=1&b=2".to_string()]);
    }

    #[test]
    fn test_parse_sitemap_empty() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
</urlset>"#;

        let result = parse_sitemap(xml);
        assert!(matches!(result, Err(SeoError::SitemapError(_))));
    }

    #[test]
    fn test_parse_sitemap_rejects_bad_values() {
        let bad_priority = r#"<urlset><url><loc>https://e.com/</loc><priority>1.5</priority></url></urlset>"#;
        assert!(matches!(parse_sitemap(bad_priority), Err(SeoError::Model(_))));

        let bad_freq = r#"<urlset><url><loc>https://e.com/</loc><changefreq>sometimes</changefreq></url></urlset>"#;
        assert!(matches!(parse_sitemap(bad_freq), Err(SeoError::Model(_))));

        let relative = r#"<urlset><url><loc>/about</loc></url></urlset>"#;
        assert!(matches!(parse_sitemap(relative), Err(SeoError::SitemapError(_))));

        let missing_loc = r#"<urlset><url><priority>0.5</priority></url></urlset>"#;
        assert!(matches!(parse_sitemap(missing_loc), Err(SeoError::SitemapError(_))));
    }

    #[test]
    fn test_parse_sitemap_self_closing_url() {
        let xml = r#"<urlset><url><loc>https://e.com/</loc></url><url/></urlset>"#;
        match parse_sitemap(xml) {
            Err(SeoError::SitemapError(msg)) => assert!(msg.contains("without a <loc>"), "{}", msg),
            other => panic!("Expected a missing <loc> error, got: {other:?}"),
        }
    }

    #[test]
    fn test_parse_sitemap_malformed() {
        let xml = r#"<urlset><url><loc>https://e.com/</loc></urlx></urlset>"#;
        assert!(parse_sitemap(xml).is_err());
    }

    #[test]
    fn test_sitemap_sites() {
        let sitemap = Sitemap {
            urls: vec![
                SitemapUrl {
                    loc: "https://example.com/page1".to_string(),
                    lastmod: None,
                    changefreq: None,
                    priority: None,
                },
                SitemapUrl {
                    loc: "https://example.com/page2".to_string(),
                    lastmod: None,
                    changefreq: None,
                    priority: None,
                },
            ],
        };

        let sites = sitemap.sites();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0], "https://example.com/page1");
        assert_eq!(sites[1], "https://example.com/page2");
    }
}
