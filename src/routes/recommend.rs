use crate::constants::DEFAULT_MAX_RECOMMENDATIONS;
use crate::error::{AppError, Result};
use crate::models::{RecommendRequest, RecommendResponse};
use crate::services::interpreter::parse_time_constraint;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /recommend
/// Recommend catalog walking routes for a free-text prompt
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    let time_constraint = parse_time_constraint(&request.prompt);
    let recommendations = state
        .engine
        .recommend(&request.prompt, DEFAULT_MAX_RECOMMENDATIONS);

    tracing::info!(
        time_constraint_minutes = ?time_constraint,
        count = recommendations.len(),
        "Recommendation request: time constraint {:?}, {} results",
        time_constraint,
        recommendations.len()
    );

    let count = recommendations.len();
    Ok(Json(RecommendResponse {
        prompt: request.prompt,
        time_constraint_minutes: time_constraint,
        recommendations,
        count,
    }))
}
