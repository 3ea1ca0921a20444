use std::sync::Arc;

use crate::errors::StoreError;
use crate::models::{Observation, Series};

/// Append-only observation log.
///
/// Single writer (the poller), many readers (snapshot rebuilds). `load`
/// must always reconstruct a valid `Series`, deduplicated by timestamp.
pub trait HistoryStore: Send + Sync {
    /// Read the whole log. Missing storage yields an empty series.
    fn load(&self) -> Result<Series, StoreError>;

    /// Persist one observation at the end of the log.
    fn append(&self, observation: &Observation) -> Result<(), StoreError>;
}

impl<T: HistoryStore + ?Sized> HistoryStore for Arc<T> {
    fn load(&self) -> Result<Series, StoreError> {
        (**self).load()
    }

    fn append(&self, observation: &Observation) -> Result<(), StoreError> {
        (**self).append(observation)
    }
}
