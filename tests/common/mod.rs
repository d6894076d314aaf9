// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use chrono::{DateTime, TimeZone, Utc};
use scout_api::config::Config;
use scout_api::routes::create_router;
use scout_api::services::{CalendarProvider, SnapshotCalendarProvider, TripSyncService};
use scout_api::AppState;
use std::sync::Arc;

pub const SNAPSHOT_PATH: &str = "tests/fixtures/calendar_snapshot.json";

/// Load the calendar snapshot fixture.
#[allow(dead_code)]
pub fn fixture_calendar() -> SnapshotCalendarProvider {
    SnapshotCalendarProvider::load_from_file(SNAPSHOT_PATH)
        .expect("Failed to load calendar fixture - is tests/fixtures/ committed?")
}

/// Fixed "now" the fixture events are laid out around.
#[allow(dead_code)]
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
}

/// Create a test app backed by the given calendar provider.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app_with(calendar: Arc<dyn CalendarProvider>) -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let trip_sync = TripSyncService::new(calendar, config.trip_lookahead_days);

    let state = Arc::new(AppState { config, trip_sync });

    (create_router(state.clone()), state)
}

/// Create a test app with no calendar configured.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(Arc::new(SnapshotCalendarProvider::default()))
}

/// Build a JSON POST request.
#[allow(dead_code)]
pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
