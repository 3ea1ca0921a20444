//! Response bodies.

use eta_core::models::Snapshot;
use eta_prediction::CacheStats;
use serde::Serialize;

/// `GET /api/data`. Empty history reports zeros, never nulls, for the
/// current value and last observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataResponse {
    pub current_percentage: f64,
    pub prediction_ts: Option<f64>,
    /// When the snapshot was computed.
    pub last_updated: f64,
    pub last_data_ts: f64,
}

impl From<&Snapshot> for DataResponse {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            current_percentage: snapshot.current_value().unwrap_or(0.0),
            prediction_ts: snapshot.prediction.target_timestamp(),
            last_updated: snapshot.computed_at,
            last_data_ts: snapshot.last_observation_at().unwrap_or(0.0),
        }
    }
}

/// `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub observations: usize,
    pub cache: CacheStats,
}
