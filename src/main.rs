use axum::Router;
use greenwalk::catalog::RouteCatalog;
use greenwalk::config::Config;
use greenwalk::services::intent::{DisabledIntentClient, DistanceIntent, HttpIntentClient};
use greenwalk::services::interpreter::PromptInterpreter;
use greenwalk::services::osrm::OsrmClient;
use greenwalk::services::recommendation::RecommendationEngine;
use greenwalk::services::route_generator::LoopRouteGenerator;
use greenwalk::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greenwalk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Greenwalk API server");
    tracing::info!("Routing service: {}", config.osrm_base_url);

    // Intent service is optional: missing credentials disable inference
    // without failing startup.
    let intent_enabled = config.intent_configured();
    let intent: Arc<dyn DistanceIntent> = match (&config.intent_api_url, &config.intent_api_key) {
        (Some(url), Some(key)) => {
            tracing::info!("Distance intent service configured");
            Arc::new(HttpIntentClient::new(
                url.clone(),
                key.clone(),
                config.intent_timeout_secs,
            ))
        }
        _ => {
            tracing::info!("Intent service credentials absent, distance inference disabled");
            Arc::new(DisabledIntentClient)
        }
    };

    // Initialize services
    let osrm_client = OsrmClient::with_config(
        config.osrm_base_url.clone(),
        config.routing_timeout_secs,
    );
    let catalog = RouteCatalog::builtin();
    tracing::info!("Loaded {} catalog routes", catalog.len());

    // Create application state
    let state = Arc::new(AppState {
        engine: RecommendationEngine::new(catalog),
        interpreter: PromptInterpreter::new(intent),
        generator: LoopRouteGenerator::new(osrm_client),
        intent_enabled,
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api", greenwalk::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
