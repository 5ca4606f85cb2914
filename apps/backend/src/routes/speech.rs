//! Free-text pronunciation endpoint

use axum::{extract::State, http::StatusCode, Json};

use crate::error::{ApiError, Result};
use crate::models::SpeakRequest;
use crate::services;
use crate::AppState;

/// POST /api/speak
pub async fn speak(
    State(state): State<AppState>,
    Json(payload): Json<SpeakRequest>,
) -> Result<StatusCode> {
    if payload.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }

    services::speech::speak(state.speech.clone(), payload.text)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}
