use crate::constants::DEFAULT_LOOP_DISTANCE_KM;
use crate::error::{AppError, Result};
use crate::models::{GenerateRouteRequest, GeneratedRouteResponse};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /generate-route
/// Generate a circular walking route around the given coordinate
pub async fn generate_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRouteRequest>,
) -> Result<Json<GeneratedRouteResponse>> {
    let center = request.validate().map_err(AppError::InvalidRequest)?;

    // Explicit distance beats the prompt-derived one, which beats the default.
    let target_km = match request.distance_km {
        Some(km) => km,
        None => match request.prompt.as_deref() {
            Some(prompt) => state
                .interpreter
                .extract_route_length(prompt)
                .await
                .unwrap_or(DEFAULT_LOOP_DISTANCE_KM),
            None => DEFAULT_LOOP_DISTANCE_KM,
        },
    };

    tracing::info!(
        lat = center.lat,
        lng = center.lng,
        target_km = target_km,
        "Loop route request: ({:.4}, {:.4}), {:.1}km",
        center.lat,
        center.lng,
        target_km
    );

    let path = state.generator.generate(center, target_km).await;
    if !path.is_road() {
        tracing::info!("Returning raw-waypoint fallback path");
    }

    Ok(Json(GeneratedRouteResponse {
        route: path.into_points(),
    }))
}
