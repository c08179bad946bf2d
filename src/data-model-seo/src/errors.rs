use thiserror::Error;

/// Errors raised while building or loading the site's data model.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// Sitemap priorities live in [0.0, 1.0].
    #[error("Priority must be within [0.0, 1.0], got: {0}")]
    PriorityOutOfRange(f64),

    /// Base URLs must be absolute http(s) URLs without a query or fragment.
    #[error("Not a valid base URL: '{0}'")]
    InvalidBaseUrl(String),

    /// Last-modified values are either `today` or a `YYYY-MM-DD` date.
    #[error("Not a valid last-modified date (expected 'today' or YYYY-MM-DD): '{0}'")]
    InvalidDate(String),

    #[error("Unknown change frequency: '{0}'")]
    UnknownChangeFrequency(String),
}
