//! Data model: observations, the deduplicated series, predictions, and the
//! cached snapshot that pairs them.

pub mod observation;
pub mod prediction;
pub mod series;
pub mod snapshot;

pub use observation::Observation;
pub use prediction::{Prediction, UnavailableReason};
pub use series::Series;
pub use snapshot::Snapshot;
