//! # eta-server
//!
//! Process wiring for the `eta` binary and the read-only HTTP API over the
//! snapshot cache.
//!
//! ## Endpoints
//!
//! - `GET /` - HTML view with the series and the projection
//! - `GET /live` - self-refreshing page backed by `/api/data`
//! - `GET /api/data` - current value, projection, refresh times
//! - `GET /api/history` - the full deduplicated series
//! - `GET /health` - liveness plus cache counters

pub mod api;
pub mod app;
pub mod cli;
pub mod views;

pub use api::{create_router, ApiError, AppState};
pub use cli::Cli;
