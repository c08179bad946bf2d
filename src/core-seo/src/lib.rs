//! # Build-time SEO toolkit
//!
//! Generates the crawler-facing files of a static site from an explicit route list and site
//! configuration:
//!
//! - `sitemap.xml`, per the sitemap protocol
//! - `robots.txt`, written only when one does not exist yet
//! - per-page `<head>` tags (meta, Open Graph, Twitter Card) and schema.org JSON-LD
//!
//! All generation is pure: "today" comes from an injected [`clock::Clock`], so identical input
//! yields identical output.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use core_seo::{build, clock::SystemClock};
//! use data_model_seo::SiteConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = build(&SiteConfig::nexxt_group(), Path::new("public"), &SystemClock)?;
//!     println!("Wrote {}", report.sitemap_path.display());
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod common;
pub mod config;
mod errors;
mod generator;
pub mod head;
pub mod output;
pub mod robots;
pub mod sitemap;
pub mod structured_data;

// Public API re-exports
pub use config::load_site_config;
pub use errors::{Result, SeoError};
pub use generator::{build, page_head};
pub use output::{WriteReport, write_outputs};
pub use robots::build_robots_txt;
pub use sitemap::{build_sitemap_xml, parse_sitemap};
