// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip detection from calendar events.

use crate::models::{CalendarEvent, DetectedTrip, TripSource};
use crate::time_utils::duration_days;

/// Words in an event title or notes that suggest travel.
pub const TRAVEL_KEYWORDS: &[&str] = &[
    "trip",
    "travel",
    "flight",
    "hotel",
    "vacation",
    "conference",
    "meeting",
    "visit",
];

/// Events shorter than this are never trips.
const MIN_TRIP_DAYS: f64 = 1.0;

/// Pick out the events that look like trips.
///
/// An event qualifies if it lasts at least a day and either mentions a
/// travel keyword or has a location. Output keeps input order; overlapping
/// events each produce their own trip.
pub fn detect_trips(events: &[CalendarEvent]) -> Vec<DetectedTrip> {
    events.iter().filter_map(detect_trip).collect()
}

/// Classify a single event.
pub fn detect_trip(event: &CalendarEvent) -> Option<DetectedTrip> {
    if duration_days(event.start_date, event.end_date) < MIN_TRIP_DAYS {
        return None;
    }

    let location = event
        .location
        .as_deref()
        .filter(|location| !location.trim().is_empty());

    if !has_travel_keyword(event) && location.is_none() {
        return None;
    }

    Some(DetectedTrip {
        id: format!("calendar-{}", event.id),
        destination: location.unwrap_or(&event.title).to_string(),
        start_date: event.start_date,
        end_date: event.end_date,
        source: TripSource::Calendar,
        calendar_event_id: event.id.clone(),
        calendar_title: event.title.clone(),
    })
}

fn has_travel_keyword(event: &CalendarEvent) -> bool {
    let title = event.title.to_lowercase();
    let notes = event.notes.as_deref().unwrap_or("").to_lowercase();

    TRAVEL_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword) || notes.contains(keyword))
}
