use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sample of the tracked percentage.
///
/// `timestamp` is unix seconds (UTC). `value` is a percentage, nominally
/// 0–100 but never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    timestamp: f64,
    value: f64,
}

impl Observation {
    pub fn new(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value }
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Both fields are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.timestamp.is_finite() && self.value.is_finite()
    }

    /// The timestamp as a UTC datetime, if representable.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        unix_to_datetime(self.timestamp)
    }
}

/// Convert fractional unix seconds to a UTC datetime.
pub fn unix_to_datetime(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_at_keeps_fraction() {
        let obs = Observation::new(1_764_011_426.5, 42.0);
        let dt = obs.observed_at().unwrap();
        assert_eq!(dt.timestamp(), 1_764_011_426);
        assert_eq!(dt.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn non_finite_has_no_datetime() {
        assert!(Observation::new(f64::NAN, 1.0).observed_at().is_none());
        assert!(!Observation::new(1.0, f64::INFINITY).is_finite());
    }
}
