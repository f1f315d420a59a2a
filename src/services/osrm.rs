use crate::error::{AppError, Result};
use crate::models::Coordinates;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::constants::DEFAULT_ROUTING_TIMEOUT_SECONDS;

/// Public OSRM demo instance, used when `OSRM_BASE_URL` is absent.
pub const OSRM_PUBLIC_BASE_URL: &str = "https://router.project-osrm.org";

#[derive(Clone)]
pub struct OsrmClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl OsrmClient {
    pub fn new() -> Self {
        Self::with_config(
            OSRM_PUBLIC_BASE_URL.to_string(),
            DEFAULT_ROUTING_TIMEOUT_SECONDS,
        )
    }

    pub fn with_config(base_url: String, timeout_secs: u64) -> Self {
        OsrmClient {
            client: Client::new(),
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Fetch a walking path through the given waypoints with full geometry.
    ///
    /// A single attempt, bounded by the configured timeout. No retry: callers
    /// are expected to degrade to their own fallback on failure.
    pub async fn walking_route(&self, waypoints: &[Coordinates]) -> Result<RouteGeometry> {
        if waypoints.len() < 2 {
            return Err(AppError::InvalidRequest(
                "At least 2 waypoints required".to_string(),
            ));
        }

        // OSRM expects "lng,lat;lng,lat;..."
        let coordinates_str = waypoints
            .iter()
            .map(|c| format!("{},{}", c.lng, c.lat))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!("{}/route/v1/foot/{}", self.base_url, coordinates_str);

        tracing::debug!(
            waypoints = waypoints.len(),
            "OSRM request: {} waypoints",
            waypoints.len()
        );

        let response = self
            .client
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::RoutingApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                waypoints = waypoints.len(),
                "OSRM HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::RoutingApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let directions: OsrmRouteApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::RoutingApi(format!("Failed to parse response: {}", e)))?;

        if directions.routes.is_empty() {
            tracing::warn!(
                waypoints = waypoints.len(),
                "OSRM returned 0 routes for {} waypoints",
                waypoints.len()
            );
            return Err(AppError::RoutingApi("No routes found".to_string()));
        }

        let route = &directions.routes[0];
        tracing::debug!(
            distance_km = %format!("{:.2}", route.distance / 1000.0),
            path_points = route.geometry.coordinates.len(),
            "OSRM response: {:.2}km, {} path points",
            route.distance / 1000.0,
            route.geometry.coordinates.len()
        );
        Ok(RouteGeometry {
            distance_meters: route.distance,
            geometry: route.geometry.coordinates.clone(),
        })
    }
}

impl Default for OsrmClient {
    fn default() -> Self {
        Self::new()
    }
}

// OSRM API response types

#[derive(Debug, Deserialize)]
struct OsrmRouteApiResponse {
    routes: Vec<OsrmRoute>,
    #[allow(dead_code)]
    code: String,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64, // meters
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>, // [lng, lat] pairs
    #[allow(dead_code)]
    #[serde(rename = "type")]
    geometry_type: String,
}

// Our simplified response type

#[derive(Debug, Clone)]
pub struct RouteGeometry {
    pub distance_meters: f64,
    /// GeoJSON coordinates as [lng, lat] pairs
    pub geometry: Vec<[f64; 2]>,
}

impl RouteGeometry {
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Convert GeoJSON [lng, lat] pairs to our lat/lng order, dropping any
    /// pair that fails range validation.
    pub fn to_coordinates(&self) -> Vec<Coordinates> {
        self.geometry
            .iter()
            .filter_map(|coord| Coordinates::new(coord[1], coord[0]).ok())
            .collect()
    }
}
