// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scout API Server
//!
//! Parses voice search transcripts into gym filters and detects upcoming
//! trips from the traveler's calendar.

use scout_api::{
    config::Config,
    services::{CalendarProvider, SnapshotCalendarProvider, TripSyncService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Scout API");

    // Load calendar snapshot, if one is configured
    let calendar: Arc<dyn CalendarProvider> = match &config.calendar_snapshot_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading calendar snapshot");
            Arc::new(SnapshotCalendarProvider::load_from_file(path)?)
        }
        None => {
            tracing::warn!("CALENDAR_SNAPSHOT_PATH not set, upcoming trips will be empty");
            Arc::new(SnapshotCalendarProvider::default())
        }
    };

    let trip_sync = TripSyncService::new(calendar, config.trip_lookahead_days);
    tracing::info!(
        lookahead_days = config.trip_lookahead_days,
        "Trip sync service initialized"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        trip_sync,
    });

    // Build router
    let app = scout_api::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scout_api=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();

    Ok(())
}
