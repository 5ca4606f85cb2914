//! Dictionary endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use vocab_core::search;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services;
use crate::AppState;

/// GET /api/words
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<WordsQuery>,
) -> Json<WordListResponse> {
    let words: Vec<WordListItem> = search::filter(&state.catalog, &query.q)
        .into_iter()
        .map(WordListItem::from)
        .collect();

    Json(WordListResponse {
        total: state.catalog.count(),
        count: words.len(),
        words,
    })
}

/// GET /api/words/:id
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WordDetail>> {
    let entry = state
        .catalog
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("word {id}")))?;
    Ok(Json(WordDetail::from(entry)))
}

/// POST /api/words/:id/speak
pub async fn speak(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    let word = state
        .catalog
        .get(id)
        .map(|e| e.word().to_string())
        .ok_or_else(|| ApiError::NotFound(format!("word {id}")))?;

    services::speech::speak(state.speech.clone(), word)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}
