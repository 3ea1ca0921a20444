//! History store errors.

use std::path::PathBuf;

use super::error_code::{self, EtaErrorCode};

/// Errors that can occur reading or appending the history log.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformed history line {line}: {content:?} ({reason})")]
    Malformed {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("history I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history store lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl EtaErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => error_code::STORE_MALFORMED,
            Self::Io { .. } => error_code::STORE_IO,
            Self::LockPoisoned(_) => error_code::STORE_LOCK,
        }
    }
}
