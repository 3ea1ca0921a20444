use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Poller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    pub enabled: bool,
    /// Seconds between iterations, independent of outcome.
    pub interval_secs: u64,
    /// Seed the dedup cursor from the newest persisted timestamp on startup.
    pub resume_cursor: bool,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_POLLER_ENABLED,
            interval_secs: defaults::DEFAULT_POLL_INTERVAL_SECS,
            resume_cursor: defaults::DEFAULT_RESUME_CURSOR,
        }
    }
}

impl PollerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
