use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Routing API error: {0}")]
    RoutingApi(String),

    #[error("Intent API error: {0}")]
    IntentApi(String),
}

// Convert AppError into HTTP responses. Routing and intent failures are
// normally absorbed into fallbacks before reaching a handler; the mappings
// here cover any that escape.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::RoutingApi(ref e) => {
                tracing::error!("Routing API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Routing service error")
            }
            AppError::IntentApi(ref e) => {
                tracing::error!("Intent API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Intent service error")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
