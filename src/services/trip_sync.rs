// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Upcoming-trip sync.
//!
//! Ties calendar access to trip detection:
//! 1. Check calendar permission (anything but granted yields no trips)
//! 2. Read events from every calendar within the lookahead window
//! 3. Run trip detection over them

use crate::models::{CalendarPermission, DetectedTrip};
use crate::services::calendar::{CalendarError, CalendarProvider};
use crate::services::trip_detector::detect_trips;
use crate::time_utils::{format_utc_rfc3339, lookahead_window};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Default lookahead for trip detection.
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 90;
/// Longest lookahead a caller may ask for.
pub const MAX_LOOKAHEAD_DAYS: u32 = 365;

/// Result of a sync: the permission seen and the trips found.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/lib/generated/")
)]
pub struct TripSyncOutcome {
    pub permission: CalendarPermission,
    pub trips: Vec<DetectedTrip>,
}

/// Detects upcoming trips from a calendar provider.
#[derive(Clone)]
pub struct TripSyncService {
    provider: Arc<dyn CalendarProvider>,
    lookahead_days: u32,
}

impl TripSyncService {
    pub fn new(provider: Arc<dyn CalendarProvider>, lookahead_days: u32) -> Self {
        Self {
            provider,
            lookahead_days,
        }
    }

    pub fn lookahead_days(&self) -> u32 {
        self.lookahead_days
    }

    /// Detect trips starting from `now` using the configured lookahead.
    pub async fn upcoming_trips(
        &self,
        now: DateTime<Utc>,
    ) -> Result<TripSyncOutcome, CalendarError> {
        self.upcoming_trips_within(now, self.lookahead_days).await
    }

    /// Detect trips in `[now, now + days)`.
    pub async fn upcoming_trips_within(
        &self,
        now: DateTime<Utc>,
        days: u32,
    ) -> Result<TripSyncOutcome, CalendarError> {
        let permission = self.provider.check_permission().await?;
        if !permission.is_granted() {
            tracing::info!(?permission, "Calendar permission not granted, skipping sync");
            return Ok(TripSyncOutcome {
                permission,
                trips: Vec::new(),
            });
        }

        let calendar_ids: Vec<String> = self
            .provider
            .calendars()
            .await?
            .into_iter()
            .map(|calendar| calendar.id)
            .collect();

        let (start, end) = lookahead_window(now, days);
        let events = self.provider.get_events(&calendar_ids, start, end).await?;
        let trips = detect_trips(&events);

        tracing::info!(
            calendars = calendar_ids.len(),
            events = events.len(),
            trips = trips.len(),
            start = %format_utc_rfc3339(start),
            end = %format_utc_rfc3339(end),
            "Detected upcoming trips"
        );

        Ok(TripSyncOutcome { permission, trips })
    }
}
