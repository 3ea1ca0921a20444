//! Poller: fetch, dedup against the cursor, append, sleep.

use std::future::Future;
use std::time::Duration;

use eta_core::config::PollerConfig;
use eta_core::errors::{EtaErrorCode, FetchError, ParseFailure, StoreError};
use eta_core::models::Observation;
use eta_core::traits::{HistoryStore, SampleSource};
use tracing::{debug, error, info, warn, Instrument};

/// Result of one iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// New observation persisted; the cursor now points at it.
    Appended(Observation),
    /// Timestamp not newer than the cursor; nothing written.
    Duplicate { timestamp: f64, cursor: f64 },
    /// Fetch failed; nothing written, cursor unchanged.
    FetchFailed,
}

/// Iteration counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollerStats {
    pub iterations: u64,
    pub appended: u64,
    pub duplicates: u64,
    pub failures: u64,
}

/// Owns the dedup cursor. Iterations run strictly one after another.
#[derive(Debug)]
pub struct Poller<S, H> {
    source: S,
    store: H,
    interval: Duration,
    cursor: Option<f64>,
    stats: PollerStats,
}

impl<S: SampleSource, H: HistoryStore> Poller<S, H> {
    pub fn new(source: S, store: H, interval: Duration) -> Self {
        Self {
            source,
            store,
            interval,
            cursor: None,
            stats: PollerStats::default(),
        }
    }

    /// Build from config, seeding the cursor from the store when
    /// `resume_cursor` is set.
    pub fn from_config(source: S, store: H, config: &PollerConfig) -> Result<Self, StoreError> {
        let mut poller = Self::new(source, store, config.interval());
        if config.resume_cursor {
            poller.resume_from_store()?;
        }
        Ok(poller)
    }

    /// Start from a known cursor.
    pub fn with_cursor(mut self, cursor: f64) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Seed the cursor from the newest persisted timestamp.
    pub fn resume_from_store(&mut self) -> Result<Option<f64>, StoreError> {
        let latest = self.store.load()?.latest_timestamp();
        if latest.is_some() {
            self.cursor = latest;
        }
        info!(cursor = ?self.cursor, "poller cursor resumed from history");
        Ok(self.cursor)
    }

    pub fn cursor(&self) -> Option<f64> {
        self.cursor
    }

    pub fn stats(&self) -> PollerStats {
        self.stats
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One iteration: fetch, compare against the cursor, maybe append.
    ///
    /// Only an append failure is an error.
    ///
    /// The append runs inline on the calling task. It writes one short line
    /// per interval and the write lock is only ever contended by other
    /// appends, so it does not need a blocking thread the way full loads do.
    pub async fn poll_once(&mut self) -> Result<PollOutcome, StoreError> {
        self.stats.iterations += 1;
        let span = eta_core::poll_span!(self.stats.iterations);
        async {
            let observation = match self.source.fetch().await {
                Ok(obs) => obs,
                Err(e) => {
                    self.stats.failures += 1;
                    log_fetch_failure(self.source.name(), &e);
                    return Ok(PollOutcome::FetchFailed);
                }
            };

            if let Some(cursor) = self.cursor {
                if observation.timestamp() <= cursor {
                    self.stats.duplicates += 1;
                    debug!(
                        timestamp = observation.timestamp(),
                        cursor, "observation not newer than cursor, skipping"
                    );
                    return Ok(PollOutcome::Duplicate {
                        timestamp: observation.timestamp(),
                        cursor,
                    });
                }
            }

            self.store.append(&observation)?;
            self.cursor = Some(observation.timestamp());
            self.stats.appended += 1;
            info!(
                timestamp = observation.timestamp(),
                value = observation.value(),
                "observation recorded"
            );
            Ok::<_, StoreError>(PollOutcome::Appended(observation))
        }
        .instrument(span)
        .await
    }

    /// Poll until `shutdown` resolves. Shutdown is observed between
    /// iterations, never in the middle of one.
    ///
    /// Returns the final counters, or the append error that stopped the loop.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<PollerStats, StoreError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        info!(
            source = self.source.name(),
            interval_secs = self.interval.as_secs_f64(),
            "poller started"
        );

        loop {
            if let Err(e) = self.poll_once().await {
                error!(code = e.error_code(), error = %e, "history append failed, stopping poller");
                return Err(e);
            }
            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!(
            iterations = self.stats.iterations,
            appended = self.stats.appended,
            duplicates = self.stats.duplicates,
            failures = self.stats.failures,
            "poller stopped"
        );
        Ok(self.stats)
    }
}

/// Network blips and partial pages are routine; an unrecognisable page is not.
fn log_fetch_failure(source: &str, err: &FetchError) {
    let code = err.error_code();
    match err {
        FetchError::Network { .. } => warn!(source, code, error = %err, "fetch failed"),
        FetchError::Parse(ParseFailure::Incomplete { .. }) => {
            warn!(source, code, error = %err, "incomplete data, upstream layout may have changed")
        }
        FetchError::Parse(_) => error!(source, code, error = %err, "could not parse upstream response"),
    }
}
