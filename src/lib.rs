// Library exports for testing and reusability

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use services::interpreter::PromptInterpreter;
use services::recommendation::RecommendationEngine;
use services::route_generator::LoopRouteGenerator;

// App state for sharing across the application
pub struct AppState {
    pub engine: RecommendationEngine,
    pub interpreter: PromptInterpreter,
    pub generator: LoopRouteGenerator,
    /// Whether the distance-intent collaborator is live, for health reporting.
    pub intent_enabled: bool,
}
