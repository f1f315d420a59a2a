//! Stable application-wide constants.
//!
//! Values here are structural invariants, heuristic coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Recommendation ---

/// Minutes subtracted from a requested time budget to cover getting to and
/// from the route's start point.
pub const ROUTE_BUFFER_MINUTES: u32 = 5;
/// Number of recommendations returned per request.
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 3;
/// Upper bound on any parsed time budget: 24 hours.
pub const MAX_TIME_CONSTRAINT_MINUTES: u32 = 1440;

// --- Prompt-derived distance estimation ---

/// Average walking pace used to turn a time budget into a distance estimate.
pub const WALKING_MINUTES_PER_KM: f64 = 15.0;
/// Cap on distances estimated from a time budget.
pub const MAX_ESTIMATED_DISTANCE_KM: f64 = 15.0;

// --- Loop generation ---

/// Loop length when neither the request nor the prompt supplies one.
pub const DEFAULT_LOOP_DISTANCE_KM: f64 = 2.0;
/// Requested loop lengths are clamped into this range before waypoint
/// computation.
pub const MIN_LOOP_DISTANCE_KM: f64 = 0.5;
pub const MAX_LOOP_DISTANCE_KM: f64 = 20.0;
/// Kilometers per degree of latitude. Also applied to longitude, which
/// overestimates east-west offsets away from the equator.
pub const KM_PER_DEGREE: f64 = 111.0;

// --- External service timeouts (seconds, used when env vars are absent) ---

/// Routing service request timeout. Overridden by `ROUTING_TIMEOUT_SECS`.
pub const DEFAULT_ROUTING_TIMEOUT_SECONDS: u64 = 10;
/// Intent service request timeout. Overridden by `INTENT_TIMEOUT_SECS`.
pub const DEFAULT_INTENT_TIMEOUT_SECONDS: u64 = 5;
