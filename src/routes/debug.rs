use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /health - Check if services are configured
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "checks": {
            "catalog_routes": state.engine.catalog().len(),
            "intent_service": if state.intent_enabled { "configured" } else { "disabled" },
        }
    }))
}
