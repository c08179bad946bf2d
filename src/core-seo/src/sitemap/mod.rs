//! sitemap.xml generation and parsing.

mod builder;
mod parse;
mod url_utils;

pub use builder::{SITEMAP_NS, build_sitemap_xml};
pub use parse::{Sitemap, SitemapUrl, parse_sitemap};
pub use url_utils::{join_url, resolve_loc, robots_url_for};
