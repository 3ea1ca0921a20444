//! Route handlers. Each one reads a single snapshot so a response never
//! mixes two rebuilds.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use eta_core::constants::VERSION;
use eta_core::models::Series;

use super::dto::{DataResponse, HealthResponse};
use super::error::ApiResult;
use super::state::AppState;
use crate::views;

#[tracing::instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let snapshot = state.snapshot().await?;
    Ok(Html(views::render_index(&snapshot, state.target())))
}

pub async fn live() -> Html<&'static str> {
    Html(views::LIVE_PAGE)
}

#[tracing::instrument(skip(state))]
pub async fn data(State(state): State<AppState>) -> ApiResult<Json<DataResponse>> {
    let snapshot = state.snapshot().await?;
    Ok(Json(DataResponse::from(snapshot.as_ref())))
}

#[tracing::instrument(skip(state))]
pub async fn history(State(state): State<AppState>) -> ApiResult<Json<Series>> {
    let snapshot = state.snapshot().await?;
    Ok(Json(snapshot.series.clone()))
}

/// Unhealthy (503) only when the history has never been readable.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let snapshot = state.try_snapshot().await?;
    Ok(Json(HealthResponse {
        status: "ok",
        version: VERSION,
        observations: snapshot.series.len(),
        cache: state.cache_stats(),
    }))
}
