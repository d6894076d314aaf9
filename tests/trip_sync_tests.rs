// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar snapshot and upcoming-trip sync tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scout_api::models::{Calendar, CalendarEvent, CalendarPermission};
use scout_api::services::{
    CalendarError, CalendarProvider, SnapshotCalendarProvider, TripSyncService,
};
use std::sync::Arc;

mod common;

fn destinations(outcome: &scout_api::services::TripSyncOutcome) -> Vec<&str> {
    outcome
        .trips
        .iter()
        .map(|t| t.destination.as_str())
        .collect()
}

#[tokio::test]
async fn test_snapshot_loads() {
    let provider = common::fixture_calendar();

    assert_eq!(
        provider.check_permission().await.unwrap(),
        CalendarPermission::Granted
    );

    let calendars = provider.calendars().await.unwrap();
    let ids: Vec<&str> = calendars.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["personal", "work"]);
}

#[tokio::test]
async fn test_get_events_filters_window_and_calendars() {
    let provider = common::fixture_calendar();
    let now = common::fixture_now();
    let end = now + chrono::Duration::days(10);

    let events = provider
        .get_events(&["personal".to_string()], now, end)
        .await
        .unwrap();

    // Paris overlaps the window even though it ends after it
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["evt-paris", "evt-dentist"]);
}

#[tokio::test]
async fn test_upcoming_trips_default_window() {
    let sync = TripSyncService::new(Arc::new(common::fixture_calendar()), 90);

    let outcome = sync.upcoming_trips(common::fixture_now()).await.unwrap();

    assert_eq!(outcome.permission, CalendarPermission::Granted);
    assert_eq!(
        destinations(&outcome),
        vec!["Paris, France", "Vacation", "Team offsite", "Lisbon, Portugal"]
    );
}

#[tokio::test]
async fn test_upcoming_trips_short_window() {
    let sync = TripSyncService::new(Arc::new(common::fixture_calendar()), 90);

    let outcome = sync
        .upcoming_trips_within(common::fixture_now(), 30)
        .await
        .unwrap();

    assert_eq!(destinations(&outcome), vec!["Paris, France", "Team offsite"]);
}

#[tokio::test]
async fn test_denied_permission_yields_no_trips() {
    let calendars = common::fixture_calendar().calendars().await.unwrap();
    let provider = SnapshotCalendarProvider::new(CalendarPermission::Denied, calendars);
    let sync = TripSyncService::new(Arc::new(provider), 90);

    let outcome = sync.upcoming_trips(common::fixture_now()).await.unwrap();

    assert_eq!(outcome.permission, CalendarPermission::Denied);
    assert!(outcome.trips.is_empty());
}

#[tokio::test]
async fn test_denied_snapshot_refuses_reads() {
    let provider = SnapshotCalendarProvider::new(CalendarPermission::Denied, Vec::new());

    assert!(matches!(
        provider.calendars().await,
        Err(CalendarError::PermissionDenied)
    ));
}

#[tokio::test]
async fn test_default_provider_is_undetermined() {
    let sync = TripSyncService::new(Arc::new(SnapshotCalendarProvider::default()), 90);

    let outcome = sync.upcoming_trips(common::fixture_now()).await.unwrap();

    assert_eq!(outcome.permission, CalendarPermission::Undetermined);
    assert!(outcome.trips.is_empty());
}

#[test]
fn test_invalid_snapshot_json() {
    let result = SnapshotCalendarProvider::load_from_json("{ not json");
    assert!(matches!(result, Err(CalendarError::ParseError(_))));
}

#[test]
fn test_missing_snapshot_file() {
    let result = SnapshotCalendarProvider::load_from_file("tests/fixtures/does_not_exist.json");
    assert!(matches!(result, Err(CalendarError::IoError(_))));
}

/// Provider whose platform calendar is gone.
struct UnavailableCalendar;

#[async_trait]
impl CalendarProvider for UnavailableCalendar {
    async fn check_permission(&self) -> Result<CalendarPermission, CalendarError> {
        Ok(CalendarPermission::Granted)
    }

    async fn calendars(&self) -> Result<Vec<Calendar>, CalendarError> {
        Err(CalendarError::Unavailable("calendar store offline".to_string()))
    }

    async fn get_events(
        &self,
        _calendar_ids: &[String],
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_provider_failure_propagates() {
    let sync = TripSyncService::new(Arc::new(UnavailableCalendar), 90);

    let result = sync.upcoming_trips(common::fixture_now()).await;
    assert!(matches!(result, Err(CalendarError::Unavailable(_))));
}
