//! Generates circular walking routes around a point.
//!
//! The loop shape is a fixed diamond: four cardinal offsets around the start,
//! closed back on itself. The routing service turns that into a
//! road-following path; without it the raw waypoints are still a usable
//! degraded result.

use crate::constants::{KM_PER_DEGREE, MAX_LOOP_DISTANCE_KM, MIN_LOOP_DISTANCE_KM};
use crate::models::coordinates::path_length_km;
use crate::models::Coordinates;
use crate::services::osrm::OsrmClient;

/// Path produced for a loop request.
pub enum LoopPath {
    /// Road-following geometry from the routing service.
    Road(Vec<Coordinates>),
    /// Raw diamond waypoints, returned when the routing service fails.
    Waypoints(Vec<Coordinates>),
}

impl LoopPath {
    pub fn into_points(self) -> Vec<Coordinates> {
        match self {
            LoopPath::Road(points) | LoopPath::Waypoints(points) => points,
        }
    }

    pub fn is_road(&self) -> bool {
        matches!(self, LoopPath::Road(_))
    }
}

pub struct LoopRouteGenerator {
    osrm: OsrmClient,
}

impl LoopRouteGenerator {
    pub fn new(osrm: OsrmClient) -> Self {
        LoopRouteGenerator { osrm }
    }

    /// The six loop waypoints: start, north, east, south, west, start.
    ///
    /// Offsets use 111 km per degree on both axes, so east-west legs shrink
    /// less than they should away from the equator.
    pub fn diamond_waypoints(center: Coordinates, distance_km: f64) -> Vec<Coordinates> {
        let offset = distance_km / KM_PER_DEGREE / 2.0;

        vec![
            center,
            Coordinates {
                lat: center.lat + offset,
                lng: center.lng,
            },
            Coordinates {
                lat: center.lat,
                lng: center.lng + offset,
            },
            Coordinates {
                lat: center.lat - offset,
                lng: center.lng,
            },
            Coordinates {
                lat: center.lat,
                lng: center.lng - offset,
            },
            center,
        ]
    }

    /// Generate a loop path around `center` targeting `distance_km`.
    ///
    /// Always yields a usable path: road geometry when the routing service
    /// responds, the raw waypoints on any failure (connection error, timeout,
    /// non-2xx status, malformed body, or empty geometry).
    pub async fn generate(&self, center: Coordinates, distance_km: f64) -> LoopPath {
        let distance_km = distance_km.clamp(MIN_LOOP_DISTANCE_KM, MAX_LOOP_DISTANCE_KM);
        let waypoints = Self::diamond_waypoints(center, distance_km);

        match self.osrm.walking_route(&waypoints).await {
            Ok(geometry) => {
                let path = geometry.to_coordinates();
                if path.is_empty() {
                    tracing::warn!(
                        "Routing service returned empty geometry, using raw waypoints"
                    );
                    return LoopPath::Waypoints(waypoints);
                }
                tracing::info!(
                    "Loop route generated: {:.2}km over {} path points (target {:.1}km)",
                    geometry.distance_km(),
                    path.len(),
                    distance_km
                );
                LoopPath::Road(path)
            }
            Err(e) => {
                tracing::warn!(
                    "Routing service unavailable ({}), using raw waypoints: ~{:.2}km straight-line loop",
                    e,
                    path_length_km(&waypoints)
                );
                LoopPath::Waypoints(waypoints)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS_LAT: f64 = 48.8566;
    const PARIS_LNG: f64 = 2.3522;

    fn center() -> Coordinates {
        Coordinates::new(PARIS_LAT, PARIS_LNG).unwrap()
    }

    fn unreachable_generator() -> LoopRouteGenerator {
        // Nothing listens on this port, so every request falls back.
        LoopRouteGenerator::new(OsrmClient::with_config(
            "http://127.0.0.1:9".to_string(),
            1,
        ))
    }

    #[test]
    fn test_diamond_waypoints_order_and_offsets() {
        let waypoints = LoopRouteGenerator::diamond_waypoints(center(), 4.0);
        let offset = 4.0 / KM_PER_DEGREE / 2.0;

        assert_eq!(waypoints.len(), 6);
        assert_eq!(waypoints[0], center());
        assert_eq!(waypoints[5], center());

        // North, east, south, west.
        assert!((waypoints[1].lat - (PARIS_LAT + offset)).abs() < 1e-12);
        assert_eq!(waypoints[1].lng, PARIS_LNG);
        assert!((waypoints[2].lng - (PARIS_LNG + offset)).abs() < 1e-12);
        assert_eq!(waypoints[2].lat, PARIS_LAT);
        assert!((waypoints[3].lat - (PARIS_LAT - offset)).abs() < 1e-12);
        assert!((waypoints[4].lng - (PARIS_LNG - offset)).abs() < 1e-12);
    }

    #[test]
    fn test_diamond_offset_for_111_km() {
        // 111 km target puts each waypoint exactly half a degree out.
        let waypoints = LoopRouteGenerator::diamond_waypoints(center(), 111.0);
        assert!((waypoints[1].lat - (PARIS_LAT + 0.5)).abs() < 1e-12);
        assert!((waypoints[2].lng - (PARIS_LNG + 0.5)).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back_to_waypoints() {
        let generator = unreachable_generator();
        let path = generator.generate(center(), 4.0).await;

        assert!(!path.is_road());
        let points = path.into_points();
        assert_eq!(points, LoopRouteGenerator::diamond_waypoints(center(), 4.0));
    }

    #[tokio::test]
    async fn test_generate_clamps_distance() {
        let generator = unreachable_generator();

        // 0.1 km clamps up to 0.5.
        let points = generator.generate(center(), 0.1).await.into_points();
        assert_eq!(
            points,
            LoopRouteGenerator::diamond_waypoints(center(), MIN_LOOP_DISTANCE_KM)
        );

        // 100 km clamps down to 20.
        let points = generator.generate(center(), 100.0).await.into_points();
        assert_eq!(
            points,
            LoopRouteGenerator::diamond_waypoints(center(), MAX_LOOP_DISTANCE_KM)
        );
    }
}
