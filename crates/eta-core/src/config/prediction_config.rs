use serde::{Deserialize, Serialize};

use super::defaults;

/// Prediction engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Number of most recent observations fitted.
    pub window: usize,
    /// Value whose crossing time is projected.
    pub target_value: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_PREDICTION_WINDOW,
            target_value: defaults::DEFAULT_TARGET_VALUE,
        }
    }
}
