//! Built-in catalog of curated walking routes.
//!
//! The catalog is assembled once at startup and never mutated. Routes favor
//! parks and green corridors; `greenery_score` is the ranking key used by the
//! recommendation engine.

use crate::models::RouteRecord;

#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: Vec<RouteRecord>,
}

impl RouteCatalog {
    pub fn new(routes: Vec<RouteRecord>) -> Self {
        RouteCatalog { routes }
    }

    /// The six curated routes shipped with the service.
    pub fn builtin() -> Self {
        let route = |id: u32,
                     name: &str,
                     duration_minutes: u32,
                     distance_km: f64,
                     description: &str,
                     highlights: [&str; 3],
                     greenery_score: u8| RouteRecord {
            id,
            name: name.to_string(),
            duration_minutes,
            distance_km,
            description: description.to_string(),
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
            greenery_score,
        };

        RouteCatalog::new(vec![
            route(
                1,
                "Central Park Loop",
                15,
                1.2,
                "A scenic loop through Central Park with beautiful tree-lined paths",
                ["Oak Grove", "Rose Garden", "Lake View"],
                95,
            ),
            route(
                2,
                "Riverside Garden Walk",
                25,
                2.0,
                "Peaceful walk along the riverside with lush gardens and wildlife",
                ["Riverside Path", "Botanical Garden", "Bird Sanctuary"],
                90,
            ),
            route(
                3,
                "Forest Trail Circuit",
                35,
                2.8,
                "Immersive forest experience with shaded trails and natural scenery",
                ["Pine Forest", "Woodland Path", "Nature Reserve"],
                98,
            ),
            route(
                4,
                "City Park Express",
                10,
                0.8,
                "Quick refreshing walk through the neighborhood park",
                ["Community Garden", "Playground Area", "Fountain Square"],
                80,
            ),
            route(
                5,
                "Meadow and Lake Path",
                45,
                3.5,
                "Extended walk through open meadows and around a scenic lake",
                ["Wildflower Meadow", "Lake Circuit", "Picnic Grove"],
                92,
            ),
            route(
                6,
                "Urban Green Connector",
                20,
                1.5,
                "Connect multiple small parks and green spaces across the city",
                ["Pocket Parks", "Tree-lined Streets", "Community Gardens"],
                75,
            ),
        ])
    }

    pub fn all(&self) -> &[RouteRecord] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
