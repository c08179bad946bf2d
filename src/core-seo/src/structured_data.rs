//! schema.org JSON-LD documents embedded in page heads.
//!
//! `page_head` uses the organization, website and breadcrumb builders. The local business and
//! article builders are for callers rendering branch office or article pages.

use data_model_seo::{Organization, PostalAddress};
use serde_json::{Map, Value, json};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

/// Site search entry point advertised on a `WebSite`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAction {
    /// URL template, e.g. `https://example.com/search?q={search_term_string}`
    pub target: String,
    pub query_input: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBusiness {
    pub name: String,
    pub description: String,
    pub url: String,
    pub telephone: String,
    pub address: PostalAddress,
    pub opening_hours: Vec<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub headline: String,
    pub description: String,
    pub image: String,
    pub author: String,
    /// `Person` or `Organization`
    pub author_is_organization: bool,
    pub publisher: String,
    pub publisher_logo: String,
    pub date_published: String,
    pub date_modified: Option<String>,
    pub url: String,
}

fn postal_address(address: &PostalAddress) -> Value {
    json!({
        "@type": "PostalAddress",
        "streetAddress": address.street_address,
        "addressLocality": address.address_locality,
        "addressRegion": address.address_region,
        "postalCode": address.postal_code,
        "addressCountry": address.address_country,
    })
}

fn insert(data: &mut Value, key: &str, value: Value) {
    if let Value::Object(map) = data {
        map.insert(key.to_string(), value);
    }
}

pub fn organization_json_ld(organization: &Organization) -> Value {
    let mut data = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": organization.name,
        "url": organization.url,
        "logo": organization.logo,
        "description": organization.description,
    });
    if let Some(address) = &organization.address {
        insert(&mut data, "address", postal_address(address));
    }
    if let Some(contact) = &organization.contact_point {
        let mut point = Map::new();
        point.insert("@type".to_string(), json!("ContactPoint"));
        point.insert("telephone".to_string(), json!(contact.telephone));
        point.insert("contactType".to_string(), json!(contact.contact_type));
        if let Some(email) = &contact.email {
            point.insert("email".to_string(), json!(email));
        }
        insert(&mut data, "contactPoint", Value::Object(point));
    }
    if !organization.same_as.is_empty() {
        insert(&mut data, "sameAs", json!(organization.same_as));
    }
    data
}

pub fn website_json_ld(name: &str, url: &str, description: &str, search_action: Option<&SearchAction>) -> Value {
    let mut data = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": name,
        "url": url,
        "description": description,
    });
    if let Some(action) = search_action {
        insert(
            &mut data,
            "potentialAction",
            json!({
                "@type": "SearchAction",
                "target": action.target,
                "query-input": action.query_input,
            }),
        );
    }
    data
}

/// Positions are 1-based, in trail order.
pub fn breadcrumb_json_ld(items: &[BreadcrumbItem]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

pub fn local_business_json_ld(business: &LocalBusiness) -> Value {
    let mut data = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "LocalBusiness",
        "name": business.name,
        "description": business.description,
        "url": business.url,
        "telephone": business.telephone,
        "address": postal_address(&business.address),
    });
    if !business.opening_hours.is_empty() {
        let hours: Vec<Value> = business
            .opening_hours
            .iter()
            .map(|day| json!({"@type": "OpeningHoursSpecification", "dayOfWeek": day}))
            .collect();
        insert(&mut data, "openingHoursSpecification", Value::Array(hours));
    }
    if let Some(image) = &business.image {
        insert(&mut data, "image", json!(image));
    }
    data
}

pub fn article_json_ld(article: &Article) -> Value {
    let author_type = if article.author_is_organization { "Organization" } else { "Person" };
    let mut data = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": article.headline,
        "description": article.description,
        "image": article.image,
        "author": {"@type": author_type, "name": article.author},
        "publisher": {
            "@type": "Organization",
            "name": article.publisher,
            "logo": {"@type": "ImageObject", "url": article.publisher_logo},
        },
        "datePublished": article.date_published,
        "url": article.url,
    });
    if let Some(modified) = &article.date_modified {
        insert(&mut data, "dateModified", json!(modified));
    }
    data
}

/// Wraps a JSON-LD document in a `<script>` tag.
///
/// `</` inside the JSON is written as `<\/` so string values cannot close the script element.
pub fn script_tag(id: &str, data: &Value) -> String {
    let json = serde_json::to_string_pretty(data)
        .unwrap_or_else(|_| data.to_string())
        .replace("</", "<\\/");
    format!(r#"<script type="application/ld+json" id="{}">{}</script>"#, id, json)
}
