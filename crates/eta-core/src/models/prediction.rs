use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::observation::unix_to_datetime;

/// Why no projection could be made. Not an error: a valid "no projection
/// yet" state surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// Fewer than two observations in the window.
    InsufficientData,
    /// Every timestamp in the window is identical.
    DegenerateWindow,
    /// The trend is flat or regressing.
    NonPositiveSlope,
}

/// Projected completion time derived from a series window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Prediction {
    Projected {
        /// Unix seconds at which the trend reaches the target. May be in the past.
        target_timestamp: f64,
        /// Percentage points per second.
        slope: f64,
        intercept: f64,
        /// Number of observations the fit used.
        window: usize,
    },
    Unavailable { reason: UnavailableReason },
}

impl Prediction {
    pub fn unavailable(reason: UnavailableReason) -> Self {
        Self::Unavailable { reason }
    }

    /// The projected unix timestamp, or `None` when unavailable.
    pub fn target_timestamp(&self) -> Option<f64> {
        match self {
            Self::Projected {
                target_timestamp, ..
            } => Some(*target_timestamp),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn target_datetime(&self) -> Option<DateTime<Utc>> {
        self.target_timestamp().and_then(unix_to_datetime)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Projected { .. })
    }

    pub fn unavailable_reason(&self) -> Option<UnavailableReason> {
        match self {
            Self::Unavailable { reason } => Some(*reason),
            Self::Projected { .. } => None,
        }
    }
}

impl Default for Prediction {
    fn default() -> Self {
        Self::unavailable(UnavailableReason::InsufficientData)
    }
}
