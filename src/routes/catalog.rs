use crate::models::CatalogResponse;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /routes
/// List the full walking route catalog
pub async fn list_routes(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        routes: state.engine.catalog().all().to_vec(),
    })
}
