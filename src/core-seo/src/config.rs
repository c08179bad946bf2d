//! Loading the site configuration.

use std::path::Path;

use data_model_seo::SiteConfig;

use crate::errors::{Result, SeoError};

/// Reads a JSON site configuration, or returns the built-in Nexxt Group configuration when no
/// path is given.
pub fn load_site_config(path: Option<&Path>) -> Result<SiteConfig> {
    let Some(path) = path else {
        tracing::debug!("Using built-in site configuration");
        return Ok(SiteConfig::nexxt_group());
    };

    let json = std::fs::read_to_string(path).map_err(SeoError::io(path))?;
    let config = SiteConfig::from_json(&json).map_err(|source| SeoError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        "Loaded site configuration for {} with {} routes from {}",
        config.base_url,
        config.routes.len(),
        path.display()
    );
    Ok(config)
}
