//! Router tests via `tower::ServiceExt::oneshot`, backed by an in-memory
//! history and a manual clock.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use eta_core::clock::{Clock, ManualClock};
use eta_core::models::Observation;
use eta_core::traits::HistoryStore;
use eta_prediction::{PredictionEngine, SnapshotCache};
use eta_server::{create_router, AppState};
use serde_json::{json, Value};
use test_fixtures::MemoryHistoryStore;
use tower::ServiceExt;

const NOW: f64 = 1_764_011_500.0;

fn app_with(memory: Arc<MemoryHistoryStore>, clock: Arc<ManualClock>) -> Router {
    let store: Arc<dyn HistoryStore> = memory;
    let cache = SnapshotCache::new(
        store,
        PredictionEngine::default(),
        clock as Arc<dyn Clock>,
        Duration::from_secs(60),
    );
    create_router(AppState::new(cache))
}

fn scenario() -> Arc<MemoryHistoryStore> {
    Arc::new(MemoryHistoryStore::with_log([
        Observation::new(0.0, 10.0),
        Observation::new(30.0, 20.0),
        Observation::new(60.0, 30.0),
    ]))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

// ═══════════════════════════════════════════════════════════════════════════
// /api/data
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn data_reports_current_value_and_projection() {
    let app = app_with(scenario(), Arc::new(ManualClock::new(NOW)));
    let (status, body) = get_json(app, "/api/data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "current_percentage": 30.0,
            "prediction_ts": 270.0,
            "last_updated": NOW,
            "last_data_ts": 60.0
        })
    );
}

#[tokio::test]
async fn data_on_empty_history_is_zeros_and_null() {
    let app = app_with(
        Arc::new(MemoryHistoryStore::new()),
        Arc::new(ManualClock::new(NOW)),
    );
    let (status, body) = get_json(app, "/api/data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_percentage"], json!(0.0));
    assert_eq!(body["last_data_ts"], json!(0.0));
    assert_eq!(body["prediction_ts"], Value::Null);
}

#[tokio::test]
async fn data_is_cached_within_ttl() {
    let memory = scenario();
    let clock = Arc::new(ManualClock::new(NOW));
    let app = app_with(Arc::clone(&memory), Arc::clone(&clock));

    let (_, first) = get_json(app.clone(), "/api/data").await;
    memory.push(Observation::new(90.0, 40.0));
    clock.advance(30.0);
    let (_, second) = get_json(app.clone(), "/api/data").await;
    assert_eq!(first, second);

    clock.advance(30.0);
    let (_, third) = get_json(app, "/api/data").await;
    assert_eq!(third["current_percentage"], json!(40.0));
    assert_eq!(third["last_updated"], json!(NOW + 60.0));
}

#[tokio::test]
async fn unreadable_history_degrades_to_empty_data() {
    let memory = scenario();
    memory.set_fail_loads(true);
    let app = app_with(memory, Arc::new(ManualClock::new(NOW)));
    let (status, body) = get_json(app, "/api/data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_percentage"], json!(0.0));
}

// ═══════════════════════════════════════════════════════════════════════════
// /api/history, /health
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn history_returns_deduplicated_series() {
    let memory = scenario();
    memory.push(Observation::new(30.0, 21.0));
    let app = app_with(memory, Arc::new(ManualClock::new(NOW)));
    let (status, body) = get_json(app, "/api/history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"timestamp": 0.0, "value": 10.0},
            {"timestamp": 30.0, "value": 21.0},
            {"timestamp": 60.0, "value": 30.0}
        ])
    );
}

#[tokio::test]
async fn health_reports_counts() {
    let app = app_with(scenario(), Arc::new(ManualClock::new(NOW)));
    let (status, body) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["observations"], json!(3));
    assert_eq!(body["cache"]["rebuilds"], json!(1));
}

#[tokio::test]
async fn health_is_503_when_history_never_loaded() {
    let memory = scenario();
    memory.set_fail_loads(true);
    let app = app_with(memory, Arc::new(ManualClock::new(NOW)));
    let (status, body) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], json!("STORE_IO"));
}

// ═══════════════════════════════════════════════════════════════════════════
// PAGES
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn index_embeds_chart_data() {
    let app = app_with(scenario(), Arc::new(ManualClock::new(NOW)));
    let (status, html) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("const LABELS = [0.0,30000.0,60000.0];"));
    assert!(html.contains("const VALUES = [10.0,20.0,30.0];"));
    assert!(html.contains("const START_TS = 0.0;"));
    assert!(html.contains("const PREDICTION_TS = 270.0;"));
}

#[tokio::test]
async fn index_shows_configured_target() {
    let store: Arc<dyn HistoryStore> = scenario();
    let cache = SnapshotCache::new(
        store,
        PredictionEngine::new(60, 50.0),
        Arc::new(ManualClock::new(NOW)) as Arc<dyn Clock>,
        Duration::from_secs(60),
    );
    let (status, html) = get(create_router(AppState::new(cache)), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Projected to reach 50%:"));
    assert!(html.contains("const PREDICTION_TS = 120.0;"));
}

#[tokio::test]
async fn live_page_polls_data_endpoint() {
    let app = app_with(scenario(), Arc::new(ManualClock::new(NOW)));
    let (status, html) = get(app, "/live").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("/api/data"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = app_with(scenario(), Arc::new(ManualClock::new(NOW)));
    let (status, _) = get(app, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
