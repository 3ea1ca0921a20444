//! Top-level error aggregating subsystem errors via `From` conversions.

use super::error_code::{self, EtaErrorCode};
use super::{ConfigError, FetchError, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum EtaError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Server error: {reason}")]
    Server { reason: String },
}

pub type EtaResult<T> = Result<T, EtaError>;

impl EtaErrorCode for EtaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Fetch(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Server { .. } => error_code::SERVER_ERROR,
        }
    }
}
