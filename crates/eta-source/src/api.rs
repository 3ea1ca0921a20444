//! JSON API strategy.
//!
//! Reads a nested percentage and an RFC 3339 timestamp from a JSON document,
//! both addressed by JSON Pointer, e.g. with the default pointers:
//!
//! ```json
//! { "progress": { "percentage": 42.5, "updated_at": "2025-11-24T19:10:26.123456+00:00" } }
//! ```

use async_trait::async_trait;
use chrono::DateTime;
use eta_core::config::{ApiSourceConfig, SourceConfig};
use eta_core::errors::{ConfigError, FetchError, ParseFailure};
use eta_core::models::Observation;
use eta_core::traits::SampleSource;
use serde_json::Value;
use tracing::Instrument;

use crate::http::HttpFetcher;
use crate::parsing::{malformed, parse_percentage, to_unix_seconds};

/// JSON Pointers locating the two fields.
#[derive(Debug, Clone)]
pub struct ApiRules {
    percentage_pointer: String,
    timestamp_pointer: String,
}

impl ApiRules {
    pub fn from_config(config: &ApiSourceConfig) -> Result<Self, ConfigError> {
        for (field, pointer) in [
            ("source.api.percentage_pointer", &config.percentage_pointer),
            ("source.api.timestamp_pointer", &config.timestamp_pointer),
        ] {
            if !pointer.is_empty() && !pointer.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("JSON Pointer {pointer:?} must be empty or start with '/'"),
                });
            }
        }
        Ok(Self {
            percentage_pointer: config.percentage_pointer.clone(),
            timestamp_pointer: config.timestamp_pointer.clone(),
        })
    }

    /// Extract one observation from a response body.
    pub fn parse(&self, body: &str) -> Result<Observation, ParseFailure> {
        let document: Value =
            serde_json::from_str(body).map_err(|e| ParseFailure::InvalidDocument {
                format: "JSON".to_string(),
                reason: e.to_string(),
            })?;

        let percentage = present(document.pointer(&self.percentage_pointer));
        let timestamp = present(document.pointer(&self.timestamp_pointer));

        match (percentage, timestamp) {
            (Some(pct), Some(ts)) => {
                let value = self.parse_percentage(pct)?;
                let timestamp = self.parse_timestamp(ts)?;
                Ok(Observation::new(timestamp, value))
            }
            (Some(_), None) => Err(ParseFailure::Incomplete {
                found: self.percentage_pointer.clone(),
                missing: self.timestamp_pointer.clone(),
            }),
            (None, Some(_)) => Err(ParseFailure::Incomplete {
                found: self.timestamp_pointer.clone(),
                missing: self.percentage_pointer.clone(),
            }),
            (None, None) => Err(ParseFailure::Absent {
                percentage: self.percentage_pointer.clone(),
                timestamp: self.timestamp_pointer.clone(),
            }),
        }
    }

    fn parse_percentage(&self, value: &Value) -> Result<f64, ParseFailure> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .filter(|v| v.is_finite())
                .ok_or_else(|| malformed(&self.percentage_pointer, &n.to_string(), "not a finite number")),
            Value::String(s) => parse_percentage(&self.percentage_pointer, s),
            other => Err(malformed(
                &self.percentage_pointer,
                &other.to_string(),
                "expected a number",
            )),
        }
    }

    fn parse_timestamp(&self, value: &Value) -> Result<f64, ParseFailure> {
        let Value::String(raw) = value else {
            return Err(malformed(
                &self.timestamp_pointer,
                &value.to_string(),
                "expected an RFC 3339 string",
            ));
        };
        DateTime::parse_from_rfc3339(raw.trim())
            .map(to_unix_seconds)
            .map_err(|e| malformed(&self.timestamp_pointer, raw, e))
    }
}

/// Treat JSON `null` the same as a missing field.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Reads the JSON progress endpoint.
#[derive(Debug, Clone)]
pub struct ApiSource {
    http: HttpFetcher,
    rules: ApiRules,
}

impl ApiSource {
    pub fn new(config: &SourceConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http: HttpFetcher::new(config.api.url.clone(), config)?,
            rules: ApiRules::from_config(&config.api)?,
        })
    }

    pub fn rules(&self) -> &ApiRules {
        &self.rules
    }
}

#[async_trait]
impl SampleSource for ApiSource {
    fn name(&self) -> &'static str {
        "api"
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

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ApiRules {
        ApiRules::from_config(&ApiSourceConfig::default()).unwrap()
    }

    #[test]
    fn parses_nested_fields_with_fractional_seconds() {
        let body = r#"{"progress":{"percentage":42.5,"updated_at":"2025-11-24T19:10:26.5+00:00"}}"#;
        let obs = rules().parse(body).unwrap();
        assert_eq!(obs.value(), 42.5);
        assert_eq!(obs.timestamp(), 1_764_011_426.5);
    }

    #[test]
    fn honours_offset() {
        let body = r#"{"progress":{"percentage":1,"updated_at":"2025-11-24T14:10:26-05:00"}}"#;
        assert_eq!(rules().parse(body).unwrap().timestamp(), 1_764_011_426.0);
    }

    #[test]
    fn accepts_percentage_as_string() {
        let body = r#"{"progress":{"percentage":"42.5%","updated_at":"2025-11-24T19:10:26Z"}}"#;
        assert_eq!(rules().parse(body).unwrap().value(), 42.5);
    }

    #[test]
    fn null_field_counts_as_missing() {
        let body = r#"{"progress":{"percentage":null,"updated_at":"2025-11-24T19:10:26Z"}}"#;
        assert!(matches!(
            rules().parse(body),
            Err(ParseFailure::Incomplete { ref missing, .. }) if missing == "/progress/percentage"
        ));
    }

    #[test]
    fn neither_field_is_absent() {
        assert!(matches!(
            rules().parse(r#"{"status":"ok"}"#),
            Err(ParseFailure::Absent { .. })
        ));
    }

    #[test]
    fn wrong_types_are_malformed() {
        let body = r#"{"progress":{"percentage":true,"updated_at":"2025-11-24T19:10:26Z"}}"#;
        assert!(matches!(rules().parse(body), Err(ParseFailure::Malformed { .. })));

        let body = r#"{"progress":{"percentage":4,"updated_at":1764011426}}"#;
        assert!(matches!(
            rules().parse(body),
            Err(ParseFailure::Malformed { ref field, .. }) if field == "/progress/updated_at"
        ));
    }

    #[test]
    fn html_body_is_invalid_document() {
        assert!(matches!(
            rules().parse("<html></html>"),
            Err(ParseFailure::InvalidDocument { .. })
        ));
    }

    #[test]
    fn pointer_must_start_with_slash() {
        let config = ApiSourceConfig {
            percentage_pointer: "progress.percentage".to_string(),
            ..Default::default()
        };
        assert!(ApiRules::from_config(&config).is_err());
    }
}
