// Single source of truth for all default values.

use crate::constants;

// --- Source ---
pub const DEFAULT_SCRAPE_URL: &str = "https://are-we-there-yet.hackclub.com";
pub const DEFAULT_API_URL: &str = "https://are-we-there-yet.hackclub.com/api/progress";
pub const DEFAULT_PERCENTAGE_SELECTOR: &str = ".progress-text";
pub const DEFAULT_TIMESTAMP_SELECTOR: &str = ".last-updated";
pub const DEFAULT_TIMESTAMP_PREFIX: &str = "Last updated: ";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
pub const DEFAULT_PERCENTAGE_POINTER: &str = "/progress/percentage";
pub const DEFAULT_TIMESTAMP_POINTER: &str = "/progress/updated_at";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("eta/", env!("CARGO_PKG_VERSION"));

// --- Storage ---
pub const DEFAULT_HISTORY_FILENAME: &str = "history.txt";
pub const DEFAULT_STRICT_LOAD: bool = false;

// --- Poller ---
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = constants::POLL_INTERVAL_SECS;
pub const DEFAULT_RESUME_CURSOR: bool = false;
pub const DEFAULT_POLLER_ENABLED: bool = true;

// --- Prediction ---
pub const DEFAULT_PREDICTION_WINDOW: usize = constants::PREDICTION_WINDOW;
pub const DEFAULT_TARGET_VALUE: f64 = constants::TARGET_VALUE;

// --- Cache ---
pub const DEFAULT_CACHE_TTL_SECS: u64 = constants::SNAPSHOT_TTL_SECS;

// --- Server ---
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
