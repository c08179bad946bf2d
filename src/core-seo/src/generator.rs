//! Top-level build steps that tie configuration, generation and output together.

use std::path::Path;

use data_model_seo::{PageMeta, SiteConfig};

use crate::clock::Clock;
use crate::errors::Result;
use crate::head::{PageSeo, render_head, resolve_head};
use crate::output::{WriteReport, write_outputs};
use crate::robots::RobotsPolicy;
use crate::sitemap::{build_sitemap_xml, join_url};
use crate::structured_data::{BreadcrumbItem, breadcrumb_json_ld, organization_json_ld, script_tag, website_json_ld};

/// Generates sitemap.xml and robots.txt for `config` and writes them into `output_dir`.
///
/// # Errors
///
/// Returns an error if the sitemap cannot be serialized or any file cannot be written. Callers
/// running as part of a build should treat this as fatal.
pub fn build(config: &SiteConfig, output_dir: &Path, clock: &impl Clock) -> Result<WriteReport> {
    tracing::info!(
        "Generating sitemap for {} ({} routes) into {}",
        config.base_url,
        config.routes.len(),
        output_dir.display()
    );

    let sitemap = build_sitemap_xml(&config.base_url, &config.routes, clock)?;
    let robots = RobotsPolicy {
        site_name: config.seo.site_name.clone(),
        ..RobotsPolicy::default()
    }
    .render(&config.sitemap_url());

    write_outputs(&sitemap, &robots, output_dir)
}

/// Short page name for breadcrumbs: the page title up to the first ` - `.
fn breadcrumb_name(page: &PageMeta) -> String {
    page.title.split(" - ").next().unwrap_or(&page.title).trim().to_string()
}

/// Renders every head tag for the page named `page_key`, falling back to the home page.
///
/// The organization JSON-LD is always included. The root page also gets `WebSite` data; every
/// other page gets a Home → page breadcrumb.
pub fn page_head(config: &SiteConfig, page_key: &str) -> String {
    let page = config.page_or_home(page_key);
    let seo = page.map(PageSeo::from).unwrap_or_default();
    let resolved = resolve_head(&config.seo, &seo);

    let mut html = render_head(&resolved);
    html.push_str(&script_tag(
        "organization-structured-data",
        &organization_json_ld(&config.seo.organization),
    ));
    html.push('\n');

    match page {
        Some(page) if page.path != "/" => {
            let items = [
                BreadcrumbItem {
                    name: "Home".to_string(),
                    url: join_url(&config.seo.site_url, "/"),
                },
                BreadcrumbItem {
                    name: breadcrumb_name(page),
                    url: resolved.canonical.clone(),
                },
            ];
            html.push_str(&script_tag("breadcrumb-structured-data", &breadcrumb_json_ld(&items)));
        }
        _ => {
            let website = website_json_ld(
                &config.seo.site_name,
                &config.seo.site_url,
                &config.seo.default_description,
                None,
            );
            html.push_str(&script_tag("website-structured-data", &website));
        }
    }
    html.push('\n');
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumb_name() {
        let config = SiteConfig::nexxt_group();
        let name = |key| breadcrumb_name(config.page_or_home(key).unwrap());
        assert_eq!(name("about"), "About Us");
        assert_eq!(name("subsidiaries"), "Our Subsidiaries");
        assert_eq!(name("careers"), "Careers");
    }

    #[test]
    fn test_page_head_home() {
        let html = page_head(&SiteConfig::nexxt_group(), "home");
        assert!(html.contains(r#"id="organization-structured-data""#));
        assert!(html.contains(r#"id="website-structured-data""#));
        assert!(!html.contains("BreadcrumbList"));
        assert!(html.contains(r#"<meta http-equiv="content-language" content="en">"#));
        assert!(html.contains("<title>Global Business Accelerator - Trusted Excellence | Nexxt Group</title>"));
    }

    #[test]
    fn test_page_head_inner_page() {
        let html = page_head(&SiteConfig::nexxt_group(), "contact");
        assert!(html.contains(r#"<link rel="canonical" href="https://nexxtgroup.com/contact">"#));
        assert!(html.contains("BreadcrumbList"));
        assert!(html.contains(r#""name": "Contact Us""#));
        assert!(!html.contains(r#"id="website-structured-data""#));
    }

    #[test]
    fn test_page_head_unknown_page_falls_back_to_home() {
        let config = SiteConfig::nexxt_group();
        assert_eq!(page_head(&config, "blog"), page_head(&config, "home"));
    }

    #[test]
    fn test_page_head_without_pages_uses_site_defaults() {
        let mut config = SiteConfig::nexxt_group();
        config.pages.clear();
        let html = page_head(&config, "about");
        assert!(html.contains("<title>Nexxt Group - Global Business Accelerator</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://nexxtgroup.com/">"#));
    }
}
