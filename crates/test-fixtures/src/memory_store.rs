//! In-memory `HistoryStore` with failure injection.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use eta_core::errors::StoreError;
use eta_core::models::{Observation, Series};
use eta_core::traits::HistoryStore;

/// Keeps every appended observation in write order, like the file log.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    log: Mutex<Vec<Observation>>,
    fail_loads: AtomicBool,
    fail_appends: AtomicBool,
    loads: AtomicUsize,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated log.
    pub fn with_log(observations: impl IntoIterator<Item = Observation>) -> Self {
        let store = Self::default();
        store.log.lock().unwrap().extend(observations);
        store
    }

    /// Raw appended records, duplicates included.
    pub fn log(&self) -> Vec<Observation> {
        self.log.lock().unwrap().clone()
    }

    /// Append outside the `HistoryStore` path (e.g. another writer).
    pub fn push(&self, observation: Observation) {
        self.log.lock().unwrap().push(observation);
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }

    /// Number of `load` calls so far, failed ones included.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    fn injected(op: &str) -> StoreError {
        StoreError::io(
            "<memory>",
            std::io::Error::new(std::io::ErrorKind::Other, format!("injected {op} failure")),
        )
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<Series, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(Self::injected("load"));
        }
        Ok(Series::from_observations(self.log()))
    }

    fn append(&self, observation: &Observation) -> Result<(), StoreError> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(Self::injected("append"));
        }
        self.push(*observation);
        Ok(())
    }
}
