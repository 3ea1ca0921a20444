use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Which retrieval strategy the poller samples with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Parse the public HTML page.
    #[default]
    Scrape,
    /// Read the JSON endpoint.
    Api,
}

impl FromStr for SourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scrape" | "html" => Ok(Self::Scrape),
            "api" | "json" => Ok(Self::Api),
            other => Err(ConfigError::InvalidValue {
                field: "source.kind".to_string(),
                message: format!("unknown source kind {other:?} (expected \"scrape\" or \"api\")"),
            }),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scrape => f.write_str("scrape"),
            Self::Api => f.write_str("api"),
        }
    }
}

/// Sample source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
    pub scrape: ScrapeSourceConfig,
    pub api: ApiSourceConfig,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            timeout_secs: defaults::DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            scrape: ScrapeSourceConfig::default(),
            api: ApiSourceConfig::default(),
        }
    }
}

impl SourceConfig {
    /// URL of the currently selected source.
    pub fn active_url(&self) -> &str {
        match self.kind {
            SourceKind::Scrape => &self.scrape.url,
            SourceKind::Api => &self.api.url,
        }
    }

    /// Override the URL of the currently selected source.
    pub fn set_active_url(&mut self, url: String) {
        match self.kind {
            SourceKind::Scrape => self.scrape.url = url,
            SourceKind::Api => self.api.url = url,
        }
    }
}

/// HTML scrape settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeSourceConfig {
    pub url: String,
    /// CSS selector of the element holding e.g. `42.5%`.
    pub percentage_selector: String,
    /// CSS selector of the element holding e.g. `Last updated: 2025-11-24 19:10:26 +0000`.
    pub timestamp_selector: String,
    /// Text stripped from the start of the timestamp element.
    pub timestamp_prefix: String,
    /// `chrono` format of the remaining timestamp text.
    pub timestamp_format: String,
}

impl Default for ScrapeSourceConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_SCRAPE_URL.to_string(),
            percentage_selector: defaults::DEFAULT_PERCENTAGE_SELECTOR.to_string(),
            timestamp_selector: defaults::DEFAULT_TIMESTAMP_SELECTOR.to_string(),
            timestamp_prefix: defaults::DEFAULT_TIMESTAMP_PREFIX.to_string(),
            timestamp_format: defaults::DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// JSON API settings. Fields are addressed with JSON Pointers (RFC 6901).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSourceConfig {
    pub url: String,
    pub percentage_pointer: String,
    /// Must point at an RFC 3339 timestamp string.
    pub timestamp_pointer: String,
}

impl Default for ApiSourceConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_API_URL.to_string(),
            percentage_pointer: defaults::DEFAULT_PERCENTAGE_POINTER.to_string(),
            timestamp_pointer: defaults::DEFAULT_TIMESTAMP_POINTER.to_string(),
        }
    }
}
