// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar access.
//!
//! [`CalendarProvider`] abstracts the device calendar. The service ships
//! with [`SnapshotCalendarProvider`], which serves a JSON snapshot of the
//! user's calendars.

use crate::models::{Calendar, CalendarEvent, CalendarPermission};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Read access to a user's calendars.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Current calendar permission.
    async fn check_permission(&self) -> Result<CalendarPermission, CalendarError>;

    /// Calendars visible to the user.
    async fn calendars(&self) -> Result<Vec<Calendar>, CalendarError>;

    /// Events from the given calendars overlapping `[start, end)`.
    async fn get_events(
        &self,
        calendar_ids: &[String],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError>;
}

/// On-disk snapshot format.
#[derive(Debug, Deserialize)]
struct CalendarSnapshot {
    #[serde(default)]
    permission: CalendarPermission,
    #[serde(default)]
    calendars: Vec<Calendar>,
}

/// Calendar provider backed by an in-memory snapshot.
///
/// The default value has undetermined permission and no calendars.
#[derive(Debug, Default, Clone)]
pub struct SnapshotCalendarProvider {
    permission: CalendarPermission,
    calendars: Vec<Calendar>,
}

impl SnapshotCalendarProvider {
    pub fn new(permission: CalendarPermission, calendars: Vec<Calendar>) -> Self {
        Self {
            permission,
            calendars,
        }
    }

    /// Load a snapshot from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CalendarError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CalendarError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a snapshot from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CalendarError> {
        let snapshot: CalendarSnapshot = serde_json::from_str(json_data)
            .map_err(|e| CalendarError::ParseError(e.to_string()))?;

        tracing::info!(
            permission = ?snapshot.permission,
            calendars = snapshot.calendars.len(),
            events = snapshot.calendars.iter().map(|c| c.events.len()).sum::<usize>(),
            "Loaded calendar snapshot"
        );

        Ok(Self::new(snapshot.permission, snapshot.calendars))
    }

    fn ensure_granted(&self) -> Result<(), CalendarError> {
        if self.permission.is_granted() {
            Ok(())
        } else {
            Err(CalendarError::PermissionDenied)
        }
    }
}

#[async_trait]
impl CalendarProvider for SnapshotCalendarProvider {
    async fn check_permission(&self) -> Result<CalendarPermission, CalendarError> {
        Ok(self.permission)
    }

    async fn calendars(&self) -> Result<Vec<Calendar>, CalendarError> {
        self.ensure_granted()?;
        Ok(self.calendars.clone())
    }

    async fn get_events(
        &self,
        calendar_ids: &[String],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        self.ensure_granted()?;

        Ok(self
            .calendars
            .iter()
            .filter(|calendar| calendar_ids.contains(&calendar.id))
            .flat_map(|calendar| calendar.events.iter())
            .filter(|event| event.start_date < end && event.end_date > start)
            .cloned()
            .collect())
    }
}

/// Errors from calendar access.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("Calendar permission not granted")]
    PermissionDenied,

    #[error("Calendar unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read calendar snapshot: {0}")]
    IoError(String),

    #[error("Failed to parse calendar snapshot: {0}")]
    ParseError(String),
}
