// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Voice search routes.

use crate::error::{AppError, Result};
use crate::models::ParsedFilters;
use crate::services::parse_voice_filters;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Voice routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/voice/filters", post(parse_filters))
}

/// Transcript produced by the app's speech-to-text step.
#[derive(Deserialize)]
pub struct VoiceFiltersRequest {
    /// Missing or null when transcription produced nothing.
    #[serde(default)]
    pub transcript: Option<String>,
}

/// Turn a transcript into search filters.
async fn parse_filters(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VoiceFiltersRequest>,
) -> Result<Json<ParsedFilters>> {
    let transcript = request.transcript.unwrap_or_default();

    let chars = transcript.chars().count();
    if chars > state.config.max_transcript_chars {
        return Err(AppError::BadRequest(format!(
            "Transcript too long ({} characters, max {})",
            chars, state.config.max_transcript_chars
        )));
    }

    let filters = parse_voice_filters(&transcript);
    tracing::debug!(chars, filters = ?filters, "Parsed voice filters");

    Ok(Json(filters))
}
