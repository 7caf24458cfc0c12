//! Card browsing endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/categories
pub async fn categories(State(state): State<AppState>) -> Result<Json<CategoriesResponse>> {
    let categories = state.db.list_categories().await?;
    Ok(Json(CategoriesResponse { categories }))
}

/// GET /api/next
///
/// Picks a least-seen card from the requested category, or from the first
/// category when none is given. Does not touch progress.
pub async fn next(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<NextCardResponse>> {
    let category = match query.selected() {
        Some(category) => category.to_string(),
        None => state
            .db
            .first_category()
            .await?
            .ok_or_else(|| ApiError::NotFound("No cards found in database.".to_string()))?,
    };

    let candidates = state.db.get_category_candidates(&category).await?;
    let picked = vocab_core::pick_next(&candidates)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("No cards found for category: {category}")))?;

    tracing::debug!(card_id = picked.card.id, seen_count = picked.seen_count, %category, "next card");
    Ok(Json(picked.into()))
}
