//! Study endpoints

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/seen
pub async fn seen(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SeenRequest>, JsonRejection>,
) -> Result<Json<OkResponse>> {
    let Json(payload) = payload?;
    let card_id = require_card_id(payload.card_id)?;

    let progress = state
        .db
        .mark_seen(card_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Card not found".to_string()))?;

    tracing::debug!(card_id, seen_count = progress.seen_count, "card marked seen");
    Ok(Json(OkResponse { ok: true }))
}

/// POST /api/check
pub async fn check(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<CheckResponse>> {
    let Json(payload) = payload?;
    let card_id = require_card_id(payload.card_id)?;

    let card = state
        .db
        .get_card(card_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Card not found".to_string()))?;

    let answer = payload.answer.unwrap_or_default();
    Ok(Json(vocab_core::check_answer(&answer, &card.en)))
}

/// Card IDs are positive; zero and absence are both rejected.
fn require_card_id(card_id: Option<i64>) -> Result<i64> {
    match card_id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ApiError::BadRequest("card_id is required".to_string())),
    }
}
