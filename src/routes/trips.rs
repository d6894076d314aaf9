// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip detection routes.

use crate::error::{AppError, Result};
use crate::models::{CalendarEvent, DetectedTrip};
use crate::services::trip_sync::{TripSyncOutcome, MAX_LOOKAHEAD_DAYS};
use crate::services::detect_trips;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Trip routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/trips/detect", post(detect))
        .route("/api/trips/upcoming", get(upcoming))
}

// ─── Detection over supplied events ──────────────────────────

#[derive(Deserialize)]
pub struct DetectTripsRequest {
    /// Events already narrowed to the app's lookahead window.
    #[serde(default)]
    pub events: Option<Vec<CalendarEvent>>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/lib/generated/")
)]
pub struct DetectTripsResponse {
    pub trips: Vec<DetectedTrip>,
}

/// Detect trips in a list of calendar events sent by the app.
async fn detect(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DetectTripsRequest>,
) -> Result<Json<DetectTripsResponse>> {
    let events = request.events.unwrap_or_default();

    if events.len() > state.config.max_events {
        return Err(AppError::BadRequest(format!(
            "Too many events ({}, max {})",
            events.len(),
            state.config.max_events
        )));
    }

    let trips = detect_trips(&events);
    tracing::debug!(events = events.len(), trips = trips.len(), "Detected trips");

    Ok(Json(DetectTripsResponse { trips }))
}

// ─── Upcoming trips from the calendar provider ───────────────

#[derive(Deserialize)]
struct UpcomingQuery {
    /// Lookahead in days; defaults to the configured window.
    days: Option<u32>,
}

/// Detect upcoming trips from the configured calendar.
async fn upcoming(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UpcomingQuery>,
) -> Result<Json<TripSyncOutcome>> {
    let days = params.days.unwrap_or(state.trip_sync.lookahead_days());
    if !(1..=MAX_LOOKAHEAD_DAYS).contains(&days) {
        return Err(AppError::BadRequest(format!(
            "'days' must be between 1 and {}",
            MAX_LOOKAHEAD_DAYS
        )));
    }

    let outcome = state
        .trip_sync
        .upcoming_trips_within(chrono::Utc::now(), days)
        .await?;

    Ok(Json(outcome))
}
