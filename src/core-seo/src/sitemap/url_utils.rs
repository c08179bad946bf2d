//! URL joining utilities.

use data_model_seo::{BaseUrl, Route};

/// Resolves the absolute `<loc>` URL of a route.
///
/// Absolute http(s) paths pass through verbatim. Anything else is joined onto the base URL with
/// exactly one `/` between them.
///
/// # Examples
///
/// ```
/// # use core_seo::sitemap::resolve_loc;
/// # use data_model_seo::{BaseUrl, Route};
/// let base = BaseUrl::parse("https://nexxtgroup.com").unwrap();
/// assert_eq!(resolve_loc(&base, &Route::new("/about")), "https://nexxtgroup.com/about");
/// assert_eq!(resolve_loc(&base, &Route::new("/")), "https://nexxtgroup.com/");
/// ```
pub fn resolve_loc(base_url: &BaseUrl, route: &Route) -> String {
    if route.is_absolute() {
        return route.path.clone();
    }
    join_url(base_url.as_inner(), &route.path)
}

/// Joins a base URL and a path without producing a double slash at the seam.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// The robots.txt URL that sits next to a sitemap URL.
///
/// # Examples
///
/// ```
/// # use core_seo::sitemap::robots_url_for;
/// assert_eq!(robots_url_for("https://nexxtgroup.com/sitemap.xml"), "https://nexxtgroup.com/robots.txt");
/// ```
pub fn robots_url_for(sitemap_url: &str) -> String {
    sitemap_url.replacen("/sitemap.xml", "/robots.txt", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseUrl {
        BaseUrl::parse("https://nexxtgroup.com").unwrap()
    }

    #[test]
    fn test_resolve_loc_relative() {
        assert_eq!(resolve_loc(&base(), &Route::new("/about")), "https://nexxtgroup.com/about");
        assert_eq!(resolve_loc(&base(), &Route::new("about")), "https://nexxtgroup.com/about");
        assert_eq!(resolve_loc(&base(), &Route::new("//about")), "https://nexxtgroup.com/about");
        assert_eq!(resolve_loc(&base(), &Route::new("/")), "https://nexxtgroup.com/");
        assert_eq!(resolve_loc(&base(), &Route::new("")), "https://nexxtgroup.com/");
    }

    #[test]
    fn test_resolve_loc_absolute_passes_through() {
        let route = Route::new("https://careers.example.com/jobs");
        assert_eq!(resolve_loc(&base(), &route), "https://careers.example.com/jobs");

        let route = Route::new("http://legacy.example.com//odd");
        assert_eq!(resolve_loc(&base(), &route), "http://legacy.example.com//odd");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://a.com/", "/b"), "https://a.com/b");
        assert_eq!(join_url("https://a.com/site", "b/c"), "https://a.com/site/b/c");
    }

    #[test]
    fn test_robots_url_for() {
        assert_eq!(robots_url_for("https://a.com/sitemap.xml"), "https://a.com/robots.txt");
        assert_eq!(robots_url_for("https://a.com/maps/index.xml"), "https://a.com/maps/index.xml");
    }
}
