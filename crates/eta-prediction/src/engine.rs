//! PredictionEngine: windowed linear projection to the target value.

use eta_core::config::PredictionConfig;
use eta_core::constants::{MIN_REGRESSION_POINTS, PREDICTION_WINDOW, TARGET_VALUE};
use eta_core::models::{Prediction, Series, UnavailableReason};

use crate::regression::fit;

/// Projects when the trend of the most recent observations reaches the
/// target. Pure: no clock, no I/O.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionEngine {
    window: usize,
    target: f64,
}

impl PredictionEngine {
    pub fn new(window: usize, target: f64) -> Self {
        Self {
            window: window.max(MIN_REGRESSION_POINTS),
            target,
        }
    }

    pub fn from_config(config: &PredictionConfig) -> Self {
        Self::new(config.window, config.target_value)
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// The projected crossing time, or why there is none.
    ///
    /// The result may lie in the past; it is not clamped.
    pub fn predict(&self, series: &Series) -> Prediction {
        let points = series.window(self.window);
        if points.len() < MIN_REGRESSION_POINTS {
            return Prediction::unavailable(UnavailableReason::InsufficientData);
        }
        let Some(line) = fit(points) else {
            return Prediction::unavailable(UnavailableReason::DegenerateWindow);
        };
        if line.slope <= 0.0 || !line.slope.is_finite() {
            return Prediction::unavailable(UnavailableReason::NonPositiveSlope);
        }
        Prediction::Projected {
            target_timestamp: line.solve_for(self.target),
            slope: line.slope,
            intercept: line.intercept,
            window: points.len(),
        }
    }
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self::new(PREDICTION_WINDOW, TARGET_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eta_core::models::Observation;

    fn series(raw: &[(f64, f64)]) -> Series {
        raw.iter().map(|&(t, v)| Observation::new(t, v)).collect()
    }

    #[test]
    fn three_point_scenario_projects_270() {
        let p = PredictionEngine::default().predict(&series(&[(0.0, 10.0), (30.0, 20.0), (60.0, 30.0)]));
        assert_eq!(p.target_timestamp(), Some(270.0));
        assert!(matches!(p, Prediction::Projected { window: 3, .. }));
    }

    #[test]
    fn window_smaller_than_minimum_is_raised() {
        assert_eq!(PredictionEngine::new(0, 100.0).window(), MIN_REGRESSION_POINTS);
    }

    #[test]
    fn custom_target() {
        let p = PredictionEngine::new(60, 50.0).predict(&series(&[(0.0, 10.0), (30.0, 20.0)]));
        assert_eq!(p.target_timestamp(), Some(120.0));
    }
}
