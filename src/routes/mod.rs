pub mod catalog;
pub mod debug;
pub mod generate;
pub mod recommend;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/recommend", post(recommend::recommend))
        .route("/routes", get(catalog::list_routes))
        .route("/generate-route", post(generate::generate_route))
        .route("/health", get(debug::health_check))
        .with_state(state)
}
