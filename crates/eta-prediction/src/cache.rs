//! Snapshot cache with a fixed TTL.
//!
//! Holds at most one `Snapshot`. A read within the TTL returns it unchanged;
//! a read after expiry rebuilds it from the history store while holding the
//! state lock, so concurrent readers trigger at most one rebuild and late
//! arrivals see the fresh result. Tracks hits/misses/rebuilds.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use eta_core::clock::Clock;
use eta_core::config::CacheConfig;
use eta_core::errors::StoreError;
use eta_core::models::Snapshot;
use eta_core::traits::HistoryStore;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::engine::PredictionEngine;

/// Counter snapshot for health reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub rebuilds: u64,
    pub rebuild_failures: u64,
}

/// TTL-bounded (series, prediction) pair over a `HistoryStore`.
pub struct SnapshotCache<H: HistoryStore> {
    store: H,
    engine: PredictionEngine,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    state: Mutex<Option<Arc<Snapshot>>>,
    hits: AtomicU64,
    misses: AtomicU64,
    rebuilds: AtomicU64,
    rebuild_failures: AtomicU64,
}

impl<H: HistoryStore> SnapshotCache<H> {
    pub fn new(store: H, engine: PredictionEngine, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            store,
            engine,
            clock,
            ttl,
            state: Mutex::new(None),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            rebuilds: AtomicU64::new(0),
            rebuild_failures: AtomicU64::new(0),
        }
    }

    pub fn from_config(
        store: H,
        engine: PredictionEngine,
        clock: Arc<dyn Clock>,
        config: &CacheConfig,
    ) -> Self {
        Self::new(store, engine, clock, config.ttl())
    }

    /// The current snapshot, rebuilding it first if absent or expired.
    ///
    /// Never fails: if the very first rebuild fails, an empty snapshot is
    /// returned (and not cached, so the next call retries).
    pub fn get(&self) -> Arc<Snapshot> {
        self.try_get().unwrap_or_else(|e| {
            warn!(error = %e, "no snapshot available, serving empty");
            Arc::new(Snapshot::empty(self.clock.now()))
        })
    }

    /// Like `get`, but surfaces a rebuild failure when there is no previous
    /// snapshot to fall back on.
    pub fn try_get(&self) -> Result<Arc<Snapshot>, StoreError> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        let now = self.clock.now();
        if let Some(current) = state.as_ref() {
            if current.age(now) < self.ttl.as_secs_f64() {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Ok(Arc::clone(current));
            }
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let span = eta_core::rebuild_span!(now);
        let _enter = span.enter();

        match self.rebuild(now) {
            Ok(fresh) => {
                let fresh = Arc::new(fresh);
                *state = Some(Arc::clone(&fresh));
                Ok(fresh)
            }
            Err(e) => {
                self.rebuild_failures.fetch_add(1, Ordering::Relaxed);
                match state.as_ref() {
                    Some(stale) => {
                        warn!(
                            error = %e,
                            age_secs = stale.age(now),
                            "snapshot rebuild failed, serving previous snapshot"
                        );
                        Ok(Arc::clone(stale))
                    }
                    None => {
                        error!(error = %e, "snapshot rebuild failed");
                        Err(e)
                    }
                }
            }
        }
    }

    /// Drop the cached snapshot; the next read rebuilds.
    pub fn invalidate(&self) {
        if let Ok(mut state) = self.state.lock() {
            *state = None;
        }
        debug!("snapshot invalidated");
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            rebuilds: self.rebuilds.load(Ordering::Relaxed),
            rebuild_failures: self.rebuild_failures.load(Ordering::Relaxed),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn engine(&self) -> &PredictionEngine {
        &self.engine
    }

    fn rebuild(&self, now: f64) -> Result<Snapshot, StoreError> {
        let series = self.store.load()?;
        let prediction = self.engine.predict(&series);
        self.rebuilds.fetch_add(1, Ordering::Relaxed);
        info!(
            observations = series.len(),
            prediction_ts = prediction.target_timestamp(),
            unavailable = ?prediction.unavailable_reason(),
            "snapshot rebuilt"
        );
        Ok(Snapshot::new(series, prediction, now))
    }
}

impl<H: HistoryStore> std::fmt::Debug for SnapshotCache<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotCache")
            .field("engine", &self.engine)
            .field("ttl", &self.ttl)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
