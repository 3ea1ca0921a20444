/// eta version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Percentage at which the tracked process counts as complete.
pub const TARGET_VALUE: f64 = 100.0;

/// Number of most recent observations used for the regression window.
pub const PREDICTION_WINDOW: usize = 60;

/// Minimum number of observations needed to fit a trend.
pub const MIN_REGRESSION_POINTS: usize = 2;

/// Snapshot cache time-to-live (seconds).
pub const SNAPSHOT_TTL_SECS: u64 = 60;

/// Poll interval (seconds). The upstream refreshes roughly every 60s.
pub const POLL_INTERVAL_SECS: u64 = 30;

/// Separator between timestamp and value in the history log.
pub const HISTORY_FIELD_SEPARATOR: char = ':';
