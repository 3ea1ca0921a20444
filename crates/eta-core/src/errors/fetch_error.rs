//! Sample source errors.

use super::error_code::{self, EtaErrorCode};

/// Why a response body could not be turned into an observation.
///
/// The variants exist for diagnostics; callers treat them all as
/// `FetchError::Parse`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseFailure {
    /// One of the two expected fields was present, the other was not.
    #[error("incomplete data: found {found} but not {missing}")]
    Incomplete { found: String, missing: String },

    /// Neither expected field was present.
    #[error("neither {percentage} nor {timestamp} found")]
    Absent {
        percentage: String,
        timestamp: String,
    },

    /// A field was present but its value did not parse.
    #[error("malformed {field} {value:?}: {reason}")]
    Malformed {
        field: String,
        value: String,
        reason: String,
    },

    /// The body itself is not a valid document of the expected format.
    #[error("invalid {format} document: {reason}")]
    InvalidDocument { format: String, reason: String },
}

/// Errors from a single fetch of the upstream source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("parse error: {0}")]
    Parse(#[from] ParseFailure),
}

impl FetchError {
    pub fn network(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Network {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Partial data came back: likely an upstream layout change.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Parse(ParseFailure::Incomplete { .. }))
    }
}

impl EtaErrorCode for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Network { .. } => error_code::FETCH_NETWORK,
            Self::Parse(_) => error_code::FETCH_PARSE,
        }
    }
}
