// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod calendar;
pub mod trip_detector;
pub mod trip_sync;
pub mod voice_filter;

pub use calendar::{CalendarError, CalendarProvider, SnapshotCalendarProvider};
pub use trip_detector::detect_trips;
pub use trip_sync::{TripSyncOutcome, TripSyncService};
pub use voice_filter::parse_voice_filters;
