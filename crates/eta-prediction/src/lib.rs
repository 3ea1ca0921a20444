//! # eta-prediction
//!
//! Turns the observation history into a completion forecast.
//!
//! | Piece | Role |
//! |-------|------|
//! | `regression` | Ordinary least squares over (timestamp, value) pairs |
//! | `PredictionEngine` | Windows the series and projects the target crossing |
//! | `SnapshotCache` | TTL-bounded (series, prediction) pair, rebuilt from the store |

pub mod cache;
pub mod engine;
pub mod regression;

pub use cache::{CacheStats, SnapshotCache};
pub use engine::PredictionEngine;
pub use regression::{fit, LinearFit};
