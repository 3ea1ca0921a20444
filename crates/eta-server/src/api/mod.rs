//! HTTP read API over the snapshot cache.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::get;
use axum::Router;

pub use dto::{DataResponse, HealthResponse};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// Build the router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/live", get(handlers::live))
        // JSON
        .route("/api/data", get(handlers::data))
        .route("/api/history", get(handlers::history))
        .route("/health", get(handlers::health))
        .with_state(state)
}
