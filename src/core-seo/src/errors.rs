//! Error types for the SEO build tooling.

use std::path::PathBuf;

use data_model_seo::ModelError;
use thiserror::Error;

/// Main error type for sitemap, robots.txt and head generation.
#[derive(Debug, Error)]
pub enum SeoError {
    /// Creating the output directory or reading/writing a file failed
    #[error("Filesystem error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the sitemap document failed
    #[error("XML writing failed: {0}")]
    XmlWrite(String),

    /// Sitemap parsing failed
    #[error("Sitemap parsing failed: {0}")]
    SitemapError(String),

    /// Generated bytes were not UTF-8
    #[error("Generated output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Site configuration file is not valid
    #[error("Invalid site configuration in '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value violated a data model constraint
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl SeoError {
    /// Attaches the path that a filesystem operation failed on.
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> SeoError {
        let path = path.into();
        move |source| SeoError::Io { path, source }
    }
}

/// Type alias for Result with SeoError
pub type Result<T> = std::result::Result<T, SeoError>;
