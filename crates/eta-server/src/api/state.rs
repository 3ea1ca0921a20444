//! Shared application state: the snapshot cache behind an `Arc`.

use std::sync::Arc;

use eta_core::models::Snapshot;
use eta_core::traits::HistoryStore;
use eta_prediction::{CacheStats, SnapshotCache};

use super::error::ApiError;

/// The concrete cache the server runs with.
pub type SharedCache = SnapshotCache<Arc<dyn HistoryStore>>;

/// Cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    cache: Arc<SharedCache>,
}

impl AppState {
    pub fn new(cache: SharedCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Current snapshot. A rebuild does blocking file I/O, so it runs on the
    /// blocking pool.
    pub async fn snapshot(&self) -> Result<Arc<Snapshot>, ApiError> {
        let cache = Arc::clone(&self.cache);
        tokio::task::spawn_blocking(move || cache.get())
            .await
            .map_err(ApiError::from)
    }

    /// Like `snapshot`, but fails when no snapshot has ever been built.
    pub async fn try_snapshot(&self) -> Result<Arc<Snapshot>, ApiError> {
        let cache = Arc::clone(&self.cache);
        tokio::task::spawn_blocking(move || cache.try_get())
            .await
            .map_err(ApiError::from)?
            .map_err(ApiError::from)
    }

    /// Value the projection is aiming for.
    pub fn target(&self) -> f64 {
        self.cache.engine().target()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
