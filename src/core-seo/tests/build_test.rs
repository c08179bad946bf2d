//! Tests for the build step
//!
//! This module tests the `build()` pipeline which is responsible for:
//! - Rendering sitemap.xml from the configured routes
//! - Rendering robots.txt pointing at the sitemap
//! - Writing both into the output directory, never clobbering an existing robots.txt

use std::fs;

use chrono::NaiveDate;
use core_seo::clock::FixedClock;
use core_seo::output::{ROBOTS_FILE, SITEMAP_FILE};
use core_seo::{build, build_robots_txt, build_sitemap_xml, parse_sitemap};
use data_model_seo::{BaseUrl, ChangeFrequency, LastModified, Priority, Route, SiteConfig};

fn clock(day: u32) -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 7, day).unwrap())
}

fn base() -> BaseUrl {
    BaseUrl::parse("https://nexxtgroup.com").unwrap()
}

#[test]
fn test_one_url_element_per_route() {
    let config = SiteConfig::nexxt_group();
    let xml = build_sitemap_xml(&config.base_url, &config.routes, &clock(1)).unwrap();

    assert_eq!(xml.matches("<url>").count(), config.routes.len());
    assert_eq!(xml.matches("<loc>").count(), config.routes.len());

    let sitemap = parse_sitemap(&xml).unwrap();
    let expected: Vec<String> = ["", "about", "subsidiaries", "services", "careers", "contact"]
        .iter()
        .map(|p| format!("https://nexxtgroup.com/{}", p))
        .collect();
    assert_eq!(sitemap.sites(), expected);
    assert!(sitemap.urls.iter().all(|u| u.lastmod.as_deref() == Some("2025-07-01")));
}

#[test]
fn test_about_route_example() {
    let routes = vec![
        Route::new("/about")
            .changefreq(ChangeFrequency::Monthly)
            .priority(Priority::new(0.9).unwrap()),
    ];
    let xml = build_sitemap_xml(&base(), &routes, &clock(1)).unwrap();

    let expected_block = concat!(
        "  <url>\n",
        "    <loc>https://nexxtgroup.com/about</loc>\n",
        "    <changefreq>monthly</changefreq>\n",
        "    <priority>0.9</priority>\n",
        "  </url>",
    );
    assert!(xml.contains(expected_block), "Unexpected sitemap:\n{}", xml);
    assert!(!xml.contains("<lastmod>"));
}

#[test]
fn test_absolute_paths_pass_through() {
    let routes = vec![Route::new("https://jobs.nexxtgroup.com/openings"), Route::new("/careers")];
    let xml = build_sitemap_xml(&base(), &routes, &clock(1)).unwrap();

    assert!(xml.contains("<loc>https://jobs.nexxtgroup.com/openings</loc>"));
    assert!(xml.contains("<loc>https://nexxtgroup.com/careers</loc>"));
    assert!(!xml.contains("nexxtgroup.com//"));
}

#[test]
fn test_sitemap_is_idempotent() {
    let config = SiteConfig::nexxt_group();
    let first = build_sitemap_xml(&config.base_url, &config.routes, &clock(1)).unwrap();
    let second = build_sitemap_xml(&config.base_url, &config.routes, &clock(1)).unwrap();
    assert_eq!(first, second);

    // Only the lastmod dates tied to "today" move with the clock.
    let next_day = build_sitemap_xml(&config.base_url, &config.routes, &clock(2)).unwrap();
    assert_ne!(first, next_day);
    assert_eq!(first.replace("2025-07-01", "2025-07-02"), next_day);
}

#[test]
fn test_fixed_dates_do_not_follow_the_clock() {
    let fixed = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
    let routes = vec![Route::new("/").lastmod(LastModified::Date(fixed))];

    let a = build_sitemap_xml(&base(), &routes, &clock(1)).unwrap();
    let b = build_sitemap_xml(&base(), &routes, &clock(2)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_robots_txt_contract() {
    let robots = build_robots_txt("https://nexxtgroup.com/sitemap.xml");
    assert!(robots.lines().any(|l| l == "Sitemap: https://nexxtgroup.com/sitemap.xml"));
    assert!(robots.lines().any(|l| l == "Disallow: /admin/"));
}

#[test]
fn test_build_writes_both_files() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("public");

    let report = build(&SiteConfig::nexxt_group(), &out, &clock(1)).unwrap();

    assert!(report.robots_written);
    let sitemap = fs::read_to_string(out.join(SITEMAP_FILE)).unwrap();
    let robots = fs::read_to_string(out.join(ROBOTS_FILE)).unwrap();
    assert_eq!(parse_sitemap(&sitemap).unwrap().urls.len(), 6);
    assert!(robots.contains("Sitemap: https://nexxtgroup.com/sitemap.xml"));
    assert!(robots.starts_with("# Robots.txt for Nexxt Group\n"));
}

#[test]
fn test_second_build_keeps_robots_and_refreshes_sitemap() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path();
    let config = SiteConfig::nexxt_group();

    build(&config, out, &clock(1)).unwrap();
    let hand_edited = "User-agent: *\nDisallow: /\n";
    fs::write(out.join(ROBOTS_FILE), hand_edited).unwrap();

    let report = build(&config, out, &clock(2)).unwrap();

    assert!(!report.robots_written);
    assert_eq!(fs::read_to_string(out.join(ROBOTS_FILE)).unwrap(), hand_edited);
    let sitemap = fs::read_to_string(out.join(SITEMAP_FILE)).unwrap();
    assert!(sitemap.contains("<lastmod>2025-07-02</lastmod>"));
    assert!(!sitemap.contains("2025-07-01"));
}

#[test]
fn test_build_uses_configured_site() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = SiteConfig::nexxt_group();
    config.base_url = BaseUrl::parse("https://staging.nexxtgroup.com/").unwrap();
    config.routes = vec![Route::new("/preview")];

    build(&config, tmp.path(), &clock(1)).unwrap();

    let sitemap = fs::read_to_string(tmp.path().join(SITEMAP_FILE)).unwrap();
    let robots = fs::read_to_string(tmp.path().join(ROBOTS_FILE)).unwrap();
    assert!(sitemap.contains("<loc>https://staging.nexxtgroup.com/preview</loc>"));
    assert!(robots.contains("Sitemap: https://staging.nexxtgroup.com/sitemap.xml"));
}
