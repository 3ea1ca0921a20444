//! HTML scrape strategy.
//!
//! The progress page renders the percentage and the last update time in two
//! elements, e.g.
//!
//! ```html
//! <div class="progress-text">42.5%</div>
//! <div class="last-updated">Last updated: 2025-11-24 19:10:26 +0000</div>
//! ```

use async_trait::async_trait;
use chrono::DateTime;
use eta_core::config::{ScrapeSourceConfig, SourceConfig};
use eta_core::errors::{ConfigError, FetchError, ParseFailure};
use eta_core::models::Observation;
use eta_core::traits::SampleSource;
use scraper::{ElementRef, Html, Selector};
use tracing::Instrument;

use crate::http::HttpFetcher;
use crate::parsing::{malformed, parse_percentage, to_unix_seconds};

/// Compiled extraction rules for the progress page.
#[derive(Debug, Clone)]
pub struct ScrapeRules {
    percentage_selector: Selector,
    percentage_css: String,
    timestamp_selector: Selector,
    timestamp_css: String,
    timestamp_prefix: String,
    timestamp_format: String,
}

impl ScrapeRules {
    pub fn from_config(config: &ScrapeSourceConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            percentage_selector: compile(
                "source.scrape.percentage_selector",
                &config.percentage_selector,
            )?,
            percentage_css: config.percentage_selector.clone(),
            timestamp_selector: compile(
                "source.scrape.timestamp_selector",
                &config.timestamp_selector,
            )?,
            timestamp_css: config.timestamp_selector.clone(),
            timestamp_prefix: config.timestamp_prefix.clone(),
            timestamp_format: config.timestamp_format.clone(),
        })
    }

    /// Extract one observation from a page body.
    pub fn parse(&self, html: &str) -> Result<Observation, ParseFailure> {
        let document = Html::parse_document(html);
        let percentage = document
            .select(&self.percentage_selector)
            .next()
            .map(element_text);
        let timestamp = document
            .select(&self.timestamp_selector)
            .next()
            .map(element_text);

        match (percentage, timestamp) {
            (Some(pct), Some(ts)) => {
                let value = parse_percentage(&self.percentage_css, &pct)?;
                let timestamp = self.parse_timestamp(&ts)?;
                Ok(Observation::new(timestamp, value))
            }
            (Some(_), None) => Err(ParseFailure::Incomplete {
                found: self.percentage_css.clone(),
                missing: self.timestamp_css.clone(),
            }),
            (None, Some(_)) => Err(ParseFailure::Incomplete {
                found: self.timestamp_css.clone(),
                missing: self.percentage_css.clone(),
            }),
            (None, None) => Err(ParseFailure::Absent {
                percentage: self.percentage_css.clone(),
                timestamp: self.timestamp_css.clone(),
            }),
        }
    }

    fn parse_timestamp(&self, raw: &str) -> Result<f64, ParseFailure> {
        let text = raw.strip_prefix(&self.timestamp_prefix).unwrap_or(raw).trim();
        DateTime::parse_from_str(text, &self.timestamp_format)
            .map(to_unix_seconds)
            .map_err(|e| malformed(&self.timestamp_css, raw, e))
    }
}

/// Scrapes the public progress page.
#[derive(Debug, Clone)]
pub struct ScrapeSource {
    http: HttpFetcher,
    rules: ScrapeRules,
}

impl ScrapeSource {
    pub fn new(config: &SourceConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http: HttpFetcher::new(config.scrape.url.clone(), config)?,
            rules: ScrapeRules::from_config(&config.scrape)?,
        })
    }

    pub fn rules(&self) -> &ScrapeRules {
        &self.rules
    }
}

#[async_trait]
impl SampleSource for ScrapeSource {
    fn name(&self) -> &'static str {
        "scrape"
    }

    async fn fetch(&self) -> Result<Observation, FetchError> {
        let span = eta_core::fetch_span!(self.name(), self.http.url());
        async {
            let body = self.http.get_text().await?;
            Ok::<_, FetchError>(self.rules.parse(&body)?)
        }
        .instrument(span)
        .await
    }
}

fn compile(field: &str, css: &str) -> Result<Selector, ConfigError> {
    Selector::parse(css).map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("invalid CSS selector {css:?}: {e}"),
    })
}

/// Text content with each text node trimmed, joined without separators.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}
