use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::route::{ChangeFrequency, LastModified, Priority, Route};

/// True for absolute http(s) URLs with a host, no query, no fragment and no trailing slash.
pub fn is_valid_base_url(s: &String) -> bool {
    if s.ends_with('/') {
        return false;
    }
    match url::Url::parse(s) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some()
                && url.query().is_none()
                && url.fragment().is_none()
        }
        Err(_) => false,
    }
}

crate::newtype_valid!(
    #[derive(Serialize, Deserialize)]
    #[serde(try_from = "String", into = "String")]
    BaseUrl,
    String,
    is_valid_base_url,
    ModelError,
    |s: &String| ModelError::InvalidBaseUrl(s.clone())
);

impl BaseUrl {
    /// Validates a base URL after stripping any trailing slashes.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        BaseUrl::new(s.trim().trim_end_matches('/').to_string())
    }
}

/// schema.org `PostalAddress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub street_address: String,
    pub address_locality: String,
    pub address_region: String,
    pub postal_code: String,
    pub address_country: String,
}

/// schema.org `ContactPoint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    pub telephone: String,
    pub contact_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The company behind the site, emitted as schema.org `Organization` structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub url: String,
    pub logo: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_point: Option<ContactPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

/// Site-wide defaults that every page's head falls back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoConfig {
    pub default_title: String,
    /// `%s` is replaced with the page title.
    pub title_template: String,
    pub default_description: String,
    pub default_keywords: Vec<String>,
    pub site_url: String,
    pub site_name: String,
    /// e.g. `en_US`
    pub locale: String,
    pub author: String,
    pub twitter_handle: String,
    pub default_image: String,
    pub default_image_alt: String,
    pub organization: Organization,
}

/// Per-page title, description and keywords, looked up by `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub key: String,
    pub path: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Everything the build step needs to know about a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_url: BaseUrl,
    pub routes: Vec<Route>,
    pub seo: SeoConfig,
    #[serde(default)]
    pub pages: Vec<PageMeta>,
}

impl SiteConfig {
    /// The key of the page that unknown page lookups fall back to.
    pub const HOME_PAGE: &'static str = "home";

    /// Parses a site configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Absolute URL of the site's sitemap.
    pub fn sitemap_url(&self) -> String {
        format!("{}/sitemap.xml", self.base_url)
    }

    /// Looks up a page by key, falling back to the home page.
    pub fn page_or_home(&self, key: &str) -> Option<&PageMeta> {
        self.pages
            .iter()
            .find(|p| p.key == key)
            .or_else(|| self.pages.iter().find(|p| p.key == Self::HOME_PAGE))
    }

    /// The built-in configuration for nexxtgroup.com.
    pub fn nexxt_group() -> Self {
        let routes = [
            ("/", ChangeFrequency::Weekly, 10),
            ("/about", ChangeFrequency::Monthly, 9),
            ("/subsidiaries", ChangeFrequency::Monthly, 8),
            ("/services", ChangeFrequency::Monthly, 8),
            ("/careers", ChangeFrequency::Weekly, 7),
            ("/contact", ChangeFrequency::Monthly, 6),
        ]
        .into_iter()
        .map(|(path, changefreq, tenths)| {
            Route::new(path)
                .lastmod(LastModified::Today)
                .changefreq(changefreq)
                .priority(Priority::saturating_from_tenths(tenths))
        })
        .collect();

        Self {
            base_url: BaseUrl("https://nexxtgroup.com".to_string()),
            routes,
            seo: nexxt_group_seo(),
            pages: nexxt_group_pages(),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn nexxt_group_seo() -> SeoConfig {
    SeoConfig {
        default_title: "Nexxt Group - Global Business Accelerator".to_string(),
        title_template: "%s | Nexxt Group".to_string(),
        default_description: "Global Business Accelerator. Trusted Excellence across Automobile, Fashion, Real Estate, \
                              and Manufacturing. Two decades of proven leadership across diverse industries worldwide."
            .to_string(),
        default_keywords: strings(&[
            "nexxt group",
            "global business",
            "automobile",
            "fashion",
            "real estate",
            "manufacturing",
            "business accelerator",
            "trusted excellence",
            "international business",
            "corporate solutions",
        ]),
        site_url: "https://nexxtgroup.com".to_string(),
        site_name: "Nexxt Group".to_string(),
        locale: "en_US".to_string(),
        author: "Nexxt Group".to_string(),
        twitter_handle: "@nexxtgroup".to_string(),
        default_image: "https://nexxtgroup.com/images/og-default.jpg".to_string(),
        default_image_alt: "Nexxt Group - Global Business Accelerator".to_string(),
        organization: Organization {
            name: "Nexxt Group".to_string(),
            url: "https://nexxtgroup.com".to_string(),
            logo: "https://nexxtgroup.com/images/logo.png".to_string(),
            description: "Global Business Accelerator. Trusted Excellence across Automobile, Fashion, Real Estate, \
                          and Manufacturing."
                .to_string(),
            address: Some(PostalAddress {
                street_address: "1234 Business Plaza".to_string(),
                address_locality: "New York".to_string(),
                address_region: "NY".to_string(),
                postal_code: "10001".to_string(),
                address_country: "US".to_string(),
            }),
            contact_point: Some(ContactPoint {
                telephone: "+1-555-123-4567".to_string(),
                contact_type: "Customer Service".to_string(),
                email: Some("info@nexxtgroup.com".to_string()),
            }),
            same_as: strings(&[
                "https://www.linkedin.com/company/nexxtgroup",
                "https://twitter.com/nexxtgroup",
                "https://www.facebook.com/nexxtgroup",
            ]),
        },
    }
}

fn nexxt_group_pages() -> Vec<PageMeta> {
    let page = |key: &str, path: &str, title: &str, description: &str, keywords: &[&str]| PageMeta {
        key: key.to_string(),
        path: path.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        keywords: strings(keywords),
    };

    vec![
        page(
            "home",
            "/",
            "Global Business Accelerator - Trusted Excellence",
            "Nexxt Group: Two decades of proven leadership across Automobile, Fashion, Real Estate, and \
             Manufacturing. Accelerating global business with mature, trusted solutions.",
            &[
                "global business accelerator",
                "trusted excellence",
                "automobile",
                "fashion",
                "real estate",
                "manufacturing",
            ],
        ),
        page(
            "about",
            "/about",
            "About Us - The Nexxt Story",
            "Learn about Nexxt Group's two decades of accelerating global business across diverse industries. \
             Our story of trusted excellence and mature business solutions.",
            &["about nexxt group", "company history", "business leadership", "global expansion"],
        ),
        page(
            "subsidiaries",
            "/subsidiaries",
            "Our Subsidiaries - Diverse Industry Portfolio",
            "Explore Nexxt Group's subsidiaries: Nexxt Automobile, Nexxt Fashion, Nexxt Real Estate, and Nexxt \
             Manufacturing. Global leaders in their respective industries.",
            &[
                "subsidiaries",
                "automobile division",
                "fashion retail",
                "real estate development",
                "manufacturing",
            ],
        ),
        page(
            "services",
            "/services",
            "Global Services - Comprehensive Solutions",
            "Nexxt Group services: Automobile Dealership, Real Estate Investment, Customer Goods, and Import/Export. \
             Comprehensive solutions for global markets.",
            &[
                "automobile dealership",
                "real estate services",
                "customer goods",
                "import export",
                "global services",
            ],
        ),
        page(
            "careers",
            "/careers",
            "Careers - Join Our Global Team",
            "Join Nexxt Group's global team. Explore career opportunities across our Automobile, Fashion, Real \
             Estate, and Manufacturing divisions worldwide.",
            &["careers", "jobs", "employment", "global opportunities", "join nexxt group"],
        ),
        page(
            "contact",
            "/contact",
            "Contact Us - Get In Touch",
            "Contact Nexxt Group for partnership opportunities, business inquiries, or more information about our \
             global services and solutions.",
            &["contact", "business inquiries", "partnerships", "get in touch"],
        ),
    ]
}
