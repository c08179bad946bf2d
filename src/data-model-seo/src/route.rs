use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// How often the content at a URL is expected to change. A hint for crawlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// The sitemap-protocol spelling of this frequency.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl std::fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "never" => Ok(Self::Never),
            _ => Err(ModelError::UnknownChangeFrequency(s.to_string())),
        }
    }
}

/// Relative importance of a URL within its site, kept as whole tenths in [0, 10].
///
/// Construction rounds to one decimal digit, so `0.85` becomes `0.9`.
/// Always displays with exactly one decimal digit: `1.0`, `0.9`, `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Priority(u8);

impl Priority {
    pub const MIN: Priority = Priority(0);
    pub const MAX: Priority = Priority(10);

    /// Validates that `value` is within [0.0, 1.0] and rounds it to one decimal digit.
    pub fn new(value: f64) -> Result<Self, ModelError> {
        // NaN fails the range check.
        if !(0.0..=1.0).contains(&value) {
            return Err(ModelError::PriorityOutOfRange(value));
        }
        Ok(Priority((value * 10.0).round() as u8))
    }

    /// Builds a priority from tenths, saturating at `1.0`.
    pub const fn saturating_from_tenths(tenths: u8) -> Self {
        if tenths > 10 { Priority(10) } else { Priority(tenths) }
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn value(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl TryFrom<f64> for Priority {
    type Error = ModelError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Priority::new(value)
    }
}

impl From<Priority> for f64 {
    fn from(priority: Priority) -> Self {
        priority.value()
    }
}

/// When a route's content last changed.
///
/// `Today` is a day-granularity freshness marker: it is resolved against a clock at render time
/// rather than being baked into the route list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LastModified {
    Today,
    Date(NaiveDate),
}

impl LastModified {
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// The concrete date this value stands for, given what "today" is.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Today => today,
            Self::Date(date) => *date,
        }
    }
}

impl FromStr for LastModified {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("today") {
            return Ok(Self::Today);
        }
        NaiveDate::parse_from_str(s, Self::DATE_FORMAT)
            .map(Self::Date)
            .map_err(|_| ModelError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for LastModified {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LastModified> for String {
    fn from(value: LastModified) -> Self {
        match value {
            LastModified::Today => "today".to_string(),
            LastModified::Date(date) => date.format(LastModified::DATE_FORMAT).to_string(),
        }
    }
}

/// A single crawlable page of the site, along with its optional sitemap hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Site-relative path (`/about`) or an already-absolute URL, which is used verbatim.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<LastModified>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Route {
    /// A route with no sitemap hints.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }

    pub fn lastmod(mut self, lastmod: LastModified) -> Self {
        self.lastmod = Some(lastmod);
        self
    }

    pub fn changefreq(mut self, changefreq: ChangeFrequency) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// True if the path is already an absolute http(s) URL.
    pub fn is_absolute(&self) -> bool {
        self.path.starts_with("http://") || self.path.starts_with("https://")
    }
}
