//! API error type with JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use eta_core::errors::{error_code, EtaErrorCode, StoreError};
use serde::Serialize;
use tracing::error;

/// Errors a handler can return. Rendered as `{ "code", "message" }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// History could not be read and there is nothing cached.
    #[error("history unavailable: {0}")]
    Store(#[from] StoreError),

    #[error("internal error: {message}")]
    Internal { message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Internal {
            message: format!("snapshot task failed: {e}"),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl EtaErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Store(e) => e.error_code(),
            Self::Internal { .. } => error_code::SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            code: self.error_code(),
            message: self.to_string(),
        };
        error!(status = status.as_u16(), code = body.code, error = %body.message, "request failed");
        (status, Json(body)).into_response()
    }
}
