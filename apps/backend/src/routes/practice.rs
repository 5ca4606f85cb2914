//! Flashcard practice endpoints
//!
//! A session is opened empty; the first GET draws its card.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services;
use crate::AppState;

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("practice session {id}"))
}

/// POST /api/practice
pub async fn open(State(state): State<AppState>) -> Result<(StatusCode, Json<CardView>)> {
    let id = state.sessions()?.open(Utc::now());
    tracing::debug!(%id, "practice session opened");
    Ok((StatusCode::CREATED, Json(CardView::new(id, &SessionState::new()))))
}

/// GET /api/practice/:id
pub async fn show(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<CardView>> {
    let mut sessions = state.sessions()?;
    let session = sessions.get_mut(id, Utc::now()).ok_or_else(|| not_found(id))?;
    let view = CardView::new(id, session.show(&state.catalog)?);
    Ok(Json(view))
}

/// POST /api/practice/:id/flip
pub async fn flip(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<CardView>> {
    let mut sessions = state.sessions()?;
    let session = sessions.get_mut(id, Utc::now()).ok_or_else(|| not_found(id))?;
    Ok(Json(CardView::new(id, session.flip())))
}

/// POST /api/practice/:id/next
pub async fn next(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<CardView>> {
    let mut sessions = state.sessions()?;
    let session = sessions.get_mut(id, Utc::now()).ok_or_else(|| not_found(id))?;
    let view = CardView::new(id, session.advance(&state.catalog)?);
    Ok(Json(view))
}

/// POST /api/practice/:id/speak
pub async fn speak(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    let word = {
        let mut sessions = state.sessions()?;
        let session = sessions.get_mut(id, Utc::now()).ok_or_else(|| not_found(id))?;
        session
            .state()
            .current
            .as_ref()
            .map(|e| e.word().to_string())
    };

    let Some(word) = word else {
        return Err(ApiError::BadRequest("no card drawn yet".to_string()));
    };

    services::speech::speak(state.speech.clone(), word)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/practice/:id
pub async fn close(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    if !state.sessions()?.close(id) {
        return Err(not_found(id));
    }
    tracing::debug!(%id, "practice session closed");
    Ok(StatusCode::NO_CONTENT)
}
