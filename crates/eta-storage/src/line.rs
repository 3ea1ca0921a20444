//! Line codec for the history log.

use eta_core::constants::HISTORY_FIELD_SEPARATOR;
use eta_core::models::Observation;

/// Encode one observation as a log line, newline included.
///
/// `f64`'s `Display` is the shortest representation that parses back to the
/// same value, so a load returns exactly what was appended.
pub fn format_line(observation: &Observation) -> String {
    format!(
        "{}{}{}\n",
        observation.timestamp(),
        HISTORY_FIELD_SEPARATOR,
        observation.value()
    )
}

/// Decode one log line.
///
/// Returns `Ok(None)` for blank lines. Whitespace around each field is
/// ignored, which also accepts the older `ts: value` spacing.
pub fn parse_line(line: &str) -> Result<Option<Observation>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(HISTORY_FIELD_SEPARATOR);
    let (Some(ts), Some(value), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(format!(
            "expected exactly two fields separated by {HISTORY_FIELD_SEPARATOR:?}"
        ));
    };

    let timestamp = parse_field("timestamp", ts)?;
    let value = parse_field("value", value)?;
    Ok(Some(Observation::new(timestamp, value)))
}

fn parse_field(name: &str, raw: &str) -> Result<f64, String> {
    let parsed: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("{name} {raw:?}: {e}"))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(format!("{name} {raw:?} is not finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_then_parse_is_exact() {
        let obs = Observation::new(1_764_011_426.123456, 42.1);
        let line = format_line(&obs);
        assert_eq!(line, "1764011426.123456:42.1\n");
        assert_eq!(parse_line(&line).unwrap(), Some(obs));
    }

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_line(&Observation::new(30.0, 20.0)), "30:20\n");
    }

    #[test]
    fn accepts_legacy_spacing() {
        assert_eq!(
            parse_line("1764011426: 42.5").unwrap(),
            Some(Observation::new(1_764_011_426.0, 42.5))
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   \r").unwrap(), None);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(parse_line("1764011426").is_err());
        assert!(parse_line("1:2:3").is_err());
    }

    #[test]
    fn rejects_non_numeric_and_non_finite() {
        assert!(parse_line("yesterday:42").is_err());
        assert!(parse_line("1764011426:NaN").is_err());
        assert!(parse_line("inf:1").is_err());
    }
}
