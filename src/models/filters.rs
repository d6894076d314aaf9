// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Structured gym-search filters extracted from a voice transcript.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Filters recognized in a transcript.
///
/// Every field is optional. An absent field means the search is
/// unconstrained on that axis, never a narrowing default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/lib/generated/")
)]
pub struct ParsedFilters {
    /// Upper bound on the pass price
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub price_max: Option<u32>,
    /// Search radius in miles
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub distance: Option<u32>,
    /// Minimum star rating
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub rating: Option<f64>,
    /// Requested amenities, in canonical table order
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub amenities: Option<Vec<Amenity>>,
    /// Requested gym categories, in canonical table order
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub gym_types: Option<Vec<GymType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub time_of_day: Option<TimeOfDay>,
    /// Only ever `Some(true)`; "not open now" is not a filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub open_now: Option<bool>,
    /// Free-text location phrase (e.g. "downtown austin")
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub location: Option<String>,
}

impl ParsedFilters {
    /// True if no filter was recognized.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Canonical amenity identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/lib/generated/")
)]
pub enum Amenity {
    Pool,
    Sauna,
    Classes,
    Towels,
    Lockers,
    Parking,
    Showers,
    Wifi,
    Spa,
    Basketball,
    Tennis,
}

/// Canonical gym category identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/lib/generated/")
)]
pub enum GymType {
    Traditional,
    Crossfit,
    Yoga,
    Pilates,
    Cycling,
    Hiit,
    Climbing,
    Boxing,
}

/// Time-of-day bucket for when the user wants to work out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/lib/generated/")
)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}
