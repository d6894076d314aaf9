// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod calendar;
pub mod filters;
pub mod trip;

pub use calendar::{Calendar, CalendarEvent, CalendarPermission};
pub use filters::{Amenity, GymType, ParsedFilters, TimeOfDay};
pub use trip::{DetectedTrip, TripSource};
