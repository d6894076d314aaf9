//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honored for local development.

use crate::services::trip_sync::{DEFAULT_LOOKAHEAD_DAYS, MAX_LOOKAHEAD_DAYS};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// JSON calendar snapshot served by the calendar provider
    pub calendar_snapshot_path: Option<PathBuf>,
    /// Default trip detection window in days
    pub trip_lookahead_days: u32,
    /// Longest transcript accepted by the voice filter endpoint
    pub max_transcript_chars: usize,
    /// Most events accepted by the trip detection endpoint
    pub max_events: usize,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:8081".to_string(),
            calendar_snapshot_path: None,
            trip_lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            max_transcript_chars: 2000,
            max_events: 5000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let trip_lookahead_days =
            parse_var("TRIP_LOOKAHEAD_DAYS")?.unwrap_or(defaults.trip_lookahead_days);
        if !(1..=MAX_LOOKAHEAD_DAYS).contains(&trip_lookahead_days) {
            return Err(ConfigError::Invalid(
                "TRIP_LOOKAHEAD_DAYS",
                format!("must be between 1 and {MAX_LOOKAHEAD_DAYS}"),
            ));
        }

        Ok(Self {
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            calendar_snapshot_path: env::var("CALENDAR_SNAPSHOT_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            trip_lookahead_days,
            max_transcript_chars: parse_var("MAX_TRANSCRIPT_CHARS")?
                .unwrap_or(defaults.max_transcript_chars),
            max_events: parse_var("MAX_EVENTS")?.unwrap_or(defaults.max_events),
        })
    }
}

/// Read and parse an optional environment variable.
fn parse_var<T>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid(name, e.to_string())),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global, so everything env-related lives in one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::set_var("TRIP_LOOKAHEAD_DAYS", "30");
        env::set_var("CALENDAR_SNAPSHOT_PATH", "/tmp/calendar.json");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 8080);
        assert_eq!(config.trip_lookahead_days, 30);
        assert_eq!(
            config.calendar_snapshot_path,
            Some(PathBuf::from("/tmp/calendar.json"))
        );

        env::set_var("TRIP_LOOKAHEAD_DAYS", "0");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("TRIP_LOOKAHEAD_DAYS", _))
        ));

        env::set_var("TRIP_LOOKAHEAD_DAYS", "soon");
        assert!(Config::from_env().is_err());

        env::remove_var("TRIP_LOOKAHEAD_DAYS");
        env::remove_var("CALENDAR_SNAPSHOT_PATH");
    }
}
