//! `SampleSource` that replays a fixed script of responses.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use eta_core::errors::{FetchError, ParseFailure};
use eta_core::models::Observation;
use eta_core::traits::SampleSource;

/// Replays queued results in order. Once the script runs out every fetch is
/// a network error.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Observation, FetchError>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_results(results: impl IntoIterator<Item = Result<Observation, FetchError>>) -> Self {
        let source = Self::default();
        source.script.lock().unwrap().extend(results);
        source
    }

    pub fn push_ok(&self, timestamp: f64, value: f64) -> &Self {
        self.push(Ok(Observation::new(timestamp, value)))
    }

    pub fn push_network_error(&self) -> &Self {
        self.push(Err(FetchError::network("http://scripted", "connection refused")))
    }

    pub fn push_parse_error(&self, failure: ParseFailure) -> &Self {
        self.push(Err(FetchError::Parse(failure)))
    }

    pub fn push(&self, result: Result<Observation, FetchError>) -> &Self {
        self.script.lock().unwrap().push_back(result);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }
}

#[async_trait]
impl SampleSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self) -> Result<Observation, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(FetchError::network("http://scripted", "script exhausted")))
    }
}
