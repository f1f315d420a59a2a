use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// A curated walking route from the built-in catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteRecord {
    pub id: u32,
    pub name: String,
    pub duration_minutes: u32,
    pub distance_km: f64,
    pub description: String,
    pub highlights: Vec<String>,
    /// Static scenic-value metric, 0-100. Sole ranking key.
    pub greenery_score: u8,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub prompt: String,
}

impl RecommendRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub prompt: String,
    pub time_constraint_minutes: Option<u32>,
    pub recommendations: Vec<RouteRecord>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub routes: Vec<RouteRecord>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRouteRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

impl GenerateRouteRequest {
    /// Checks the required fields and returns the validated center point.
    pub fn validate(&self) -> Result<Coordinates, String> {
        let (Some(lat), Some(lng)) = (self.latitude, self.longitude) else {
            return Err("latitude and longitude are required".to_string());
        };
        Coordinates::new(lat, lng)
    }
}

#[derive(Debug, Serialize)]
pub struct GeneratedRouteResponse {
    pub route: Vec<Coordinates>,
}
