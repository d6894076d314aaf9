// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Voice transcript → gym-search filter extraction.
//!
//! The parser is a fixed sequence of independent keyword and regex checks
//! over the lowercased transcript. Each filter is derived on its own; the
//! order of checks *within* a filter is significant (explicit numbers beat
//! qualitative words, the first matching time-of-day bucket wins).

use crate::models::{Amenity, GymType, ParsedFilters, TimeOfDay};
use once_cell::sync::Lazy;
use regex::Regex;

/// Budget ceiling for "cheap" and friends.
const CHEAP_PRICE_MAX: u32 = 20;
/// Ceiling for "premium" and friends.
const PREMIUM_PRICE_MAX: u32 = 100;
const NEARBY_MILES: u32 = 2;
const WALKING_MILES: u32 = 1;
const TOP_RATED: f64 = 4.5;
const GOOD_RATING: f64 = 4.0;
/// Extracted locations this short or shorter are noise ("me", "a").
const MIN_LOCATION_CHARS: usize = 2;

const CHEAP_WORDS: &[&str] = &["cheap", "budget", "affordable"];
const PREMIUM_WORDS: &[&str] = &["expensive", "premium", "luxury"];
const NEARBY_WORDS: &[&str] = &["near me", "nearby", "close"];
const WALKING_WORDS: &[&str] = &["walking distance"];
const TOP_RATED_WORDS: &[&str] = &["top rated", "best", "highly rated"];
const GOOD_WORDS: &[&str] = &["good"];
const OPEN_NOW_WORDS: &[&str] = &["open now", "open right now", "currently open"];

/// Amenity synonyms, in canonical output order.
pub const AMENITY_KEYWORDS: &[(Amenity, &[&str])] = &[
    (Amenity::Pool, &["pool", "swimming", "swim"]),
    (Amenity::Sauna, &["sauna", "steam room"]),
    (Amenity::Classes, &["classes", "class", "group fitness"]),
    (Amenity::Towels, &["towel"]),
    (Amenity::Lockers, &["locker"]),
    (Amenity::Parking, &["parking"]),
    (Amenity::Showers, &["shower"]),
    (Amenity::Wifi, &["wifi", "wi-fi", "internet"]),
    (Amenity::Spa, &["spa", "massage"]),
    (Amenity::Basketball, &["basketball"]),
    (Amenity::Tennis, &["tennis"]),
];

/// Gym category synonyms, in canonical output order.
pub const GYM_TYPE_KEYWORDS: &[(GymType, &[&str])] = &[
    (
        GymType::Traditional,
        &["traditional", "weights", "weightlifting", "bodybuilding"],
    ),
    (GymType::Crossfit, &["crossfit", "cross fit"]),
    (GymType::Yoga, &["yoga"]),
    (GymType::Pilates, &["pilates", "reformer"]),
    (GymType::Cycling, &["cycling", "spin"]),
    (GymType::Hiit, &["hiit", "high intensity", "interval"]),
    (GymType::Climbing, &["climbing", "bouldering"]),
    (GymType::Boxing, &["boxing", "kickboxing", "mma"]),
];

static PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:under|less than|below|max|maximum|up to)\s*\$?(\d+)").expect("valid regex")
});

// "mi" also matches "minutes"; "within 5 minutes" reads as 5 miles.
static DISTANCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:within|less than|under)\s*(\d+)\s*(?:miles|mi)").expect("valid regex")
});

static RATING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(?:stars?|rating)").expect("valid regex"));

// Order matters: "3 pm" matches both afternoon and evening.
static TIME_OF_DAY_PATTERNS: Lazy<Vec<(TimeOfDay, Regex)>> = Lazy::new(|| {
    [
        (
            TimeOfDay::Morning,
            r"\b(?:morning|early|sunrise|before work|\d{1,2}\s*am)\b",
        ),
        (
            TimeOfDay::Afternoon,
            r"\b(?:afternoon|lunch|midday|noon|(?:12|1|2|3|4)\s*pm)\b",
        ),
        (
            TimeOfDay::Evening,
            r"\b(?:evening|after work|sunset|\d{1,2}\s*pm)\b",
        ),
        (TimeOfDay::Night, r"\b(?:night|tonight|late|midnight)\b"),
    ]
    .into_iter()
    .map(|(bucket, pattern)| (bucket, Regex::new(pattern).expect("valid regex")))
    .collect()
});

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:near|in|around|at)\s+(.+?)(?:\s+(?:gyms?|fitness|under|with|that|open)\b|$)",
    )
    .expect("valid regex")
});

/// Parse a transcript into search filters.
///
/// Never fails: text with nothing recognizable yields an empty
/// [`ParsedFilters`].
pub fn parse_voice_filters(transcript: &str) -> ParsedFilters {
    let text = transcript.to_lowercase();

    ParsedFilters {
        price_max: parse_price(&text),
        distance: parse_distance(&text),
        rating: parse_rating(&text),
        amenities: match_keyword_table(&text, AMENITY_KEYWORDS),
        gym_types: match_keyword_table(&text, GYM_TYPE_KEYWORDS),
        time_of_day: parse_time_of_day(&text),
        open_now: contains_any(&text, OPEN_NOW_WORDS).then_some(true),
        location: parse_location(&text),
    }
}

fn parse_price(text: &str) -> Option<u32> {
    if let Some(price) = capture_number::<u32>(&PRICE_RE, text) {
        return Some(price);
    }
    if contains_any(text, CHEAP_WORDS) {
        Some(CHEAP_PRICE_MAX)
    } else if contains_any(text, PREMIUM_WORDS) {
        Some(PREMIUM_PRICE_MAX)
    } else {
        None
    }
}

fn parse_distance(text: &str) -> Option<u32> {
    if let Some(miles) = capture_number::<u32>(&DISTANCE_RE, text) {
        return Some(miles);
    }
    if contains_any(text, NEARBY_WORDS) {
        Some(NEARBY_MILES)
    } else if contains_any(text, WALKING_WORDS) {
        Some(WALKING_MILES)
    } else {
        None
    }
}

fn parse_rating(text: &str) -> Option<f64> {
    if let Some(rating) = capture_number::<f64>(&RATING_RE, text) {
        return Some(rating);
    }
    if contains_any(text, TOP_RATED_WORDS) {
        Some(TOP_RATED)
    } else if contains_any(text, GOOD_WORDS) {
        Some(GOOD_RATING)
    } else {
        None
    }
}

fn parse_time_of_day(text: &str) -> Option<TimeOfDay> {
    TIME_OF_DAY_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(bucket, _)| *bucket)
}

fn parse_location(text: &str) -> Option<String> {
    let location = LOCATION_RE.captures(text)?.get(1)?.as_str().trim();
    (location.chars().count() > MIN_LOCATION_CHARS).then(|| location.to_string())
}

/// Collect every table key with at least one synonym present in `text`.
/// Returns `None` rather than an empty list.
fn match_keyword_table<T: Copy>(text: &str, table: &[(T, &[&str])]) -> Option<Vec<T>> {
    let matched: Vec<T> = table
        .iter()
        .filter(|(_, synonyms)| contains_any(text, synonyms))
        .map(|(key, _)| *key)
        .collect();

    (!matched.is_empty()).then_some(matched)
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Parse capture group 1 of the first match. A capture that does not fit
/// the target type counts as no match.
fn capture_number<T: std::str::FromStr>(re: &Regex, text: &str) -> Option<T> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}
