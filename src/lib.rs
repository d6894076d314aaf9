// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Scout API: voice search filters and calendar trip detection
//!
//! This crate provides the backend the Scout app uses to turn spoken gym
//! searches into structured filters and to spot upcoming trips in the
//! traveler's calendar.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::TripSyncService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub trip_sync: TripSyncService,
}
