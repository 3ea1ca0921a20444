//! Field parsers shared by both strategies.

use chrono::{DateTime, FixedOffset};
use eta_core::errors::ParseFailure;

/// Parse `"42.5%"`, `"42.5 %"`, or `"42.5"` into a finite number.
pub fn parse_percentage(field: &str, raw: &str) -> Result<f64, ParseFailure> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let value = number.parse::<f64>().map_err(|e| malformed(field, raw, e))?;
    if !value.is_finite() {
        return Err(malformed(field, raw, "not a finite number"));
    }
    Ok(value)
}

/// Unix seconds, keeping sub-second precision.
pub fn to_unix_seconds(dt: DateTime<FixedOffset>) -> f64 {
    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_micros()) / 1_000_000.0
}

pub(crate) fn malformed(field: &str, raw: &str, reason: impl ToString) -> ParseFailure {
    ParseFailure::Malformed {
        field: field.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}
