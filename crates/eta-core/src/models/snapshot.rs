use serde::{Deserialize, Serialize};

use super::{Prediction, Series};

/// A series paired with its prediction at the moment it was computed.
/// Rebuilt wholesale, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub series: Series,
    pub prediction: Prediction,
    /// Unix seconds of the rebuild that produced this snapshot.
    pub computed_at: f64,
}

impl Snapshot {
    pub fn new(series: Series, prediction: Prediction, computed_at: f64) -> Self {
        Self {
            series,
            prediction,
            computed_at,
        }
    }

    /// Empty series, no projection.
    pub fn empty(computed_at: f64) -> Self {
        Self::new(Series::new(), Prediction::default(), computed_at)
    }

    /// Latest reported percentage.
    pub fn current_value(&self) -> Option<f64> {
        self.series.last().map(|o| o.value())
    }

    /// Timestamp of the newest observation.
    pub fn last_observation_at(&self) -> Option<f64> {
        self.series.latest_timestamp()
    }

    /// Seconds since this snapshot was computed.
    pub fn age(&self, now: f64) -> f64 {
        now - self.computed_at
    }
}
