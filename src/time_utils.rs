// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time arithmetic.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Fractional days from `start` to `end`. Negative if `end` precedes `start`.
pub fn duration_days(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// The half-open window `[now, now + days)`.
pub fn lookahead_window(now: DateTime<Utc>, days: u32) -> (DateTime<Utc>, DateTime<Utc>) {
    (now, now + Duration::days(i64::from(days)))
}
