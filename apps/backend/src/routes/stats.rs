//! Stats endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/stats
pub async fn stats(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<StatsResponse>> {
    let stats = state.db.get_stats(query.selected()).await?;
    Ok(Json(stats))
}
