//! EtaErrorCode trait for API and log boundaries.

/// Every error enum implements this to provide a stable, machine-readable
/// code string for JSON error bodies and structured logs.
pub trait EtaErrorCode {
    /// Returns the error code string (e.g., "FETCH_NETWORK").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const FETCH_NETWORK: &str = "FETCH_NETWORK";
pub const FETCH_PARSE: &str = "FETCH_PARSE";
pub const STORE_MALFORMED: &str = "STORE_MALFORMED";
pub const STORE_IO: &str = "STORE_IO";
pub const STORE_LOCK: &str = "STORE_LOCK";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERVER_ERROR: &str = "SERVER_ERROR";
