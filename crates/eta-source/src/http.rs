//! Shared HTTP transport: one `reqwest::Client` per source with a bounded
//! per-request timeout.

use std::time::Duration;

use eta_core::config::SourceConfig;
use eta_core::errors::{ConfigError, FetchError};

/// GETs a single fixed URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>, config: &SourceConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .gzip(true)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                field: "source".to_string(),
                message: format!("cannot build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the URL and return the body. Transport failures, timeouts, and
    /// non-2xx statuses are all `FetchError::Network`.
    pub async fn get_text(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::network(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::network(&self.url, format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::network(&self.url, e))
    }
}
