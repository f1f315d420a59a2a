use greenwalk::catalog::RouteCatalog;
use greenwalk::services::intent::{DisabledIntentClient, DistanceIntent};
use greenwalk::services::interpreter::PromptInterpreter;
use greenwalk::services::osrm::OsrmClient;
use greenwalk::services::recommendation::RecommendationEngine;
use greenwalk::services::route_generator::LoopRouteGenerator;
use greenwalk::AppState;
use std::sync::Arc;

/// Routing endpoint that refuses connections, forcing the waypoint fallback.
#[allow(dead_code)]
pub const UNREACHABLE_OSRM_URL: &str = "http://127.0.0.1:9";

/// Build the app router with the built-in catalog, intent inference disabled,
/// and the routing client pointed at an unreachable endpoint.
#[allow(dead_code)]
pub fn test_app() -> axum::Router {
    let intent: Arc<dyn DistanceIntent> = Arc::new(DisabledIntentClient);
    let osrm = OsrmClient::with_config(UNREACHABLE_OSRM_URL.to_string(), 1);

    let state = Arc::new(AppState {
        engine: RecommendationEngine::new(RouteCatalog::builtin()),
        interpreter: PromptInterpreter::new(intent),
        generator: LoopRouteGenerator::new(osrm),
        intent_enabled: false,
    });

    greenwalk::routes::create_router(state)
}
