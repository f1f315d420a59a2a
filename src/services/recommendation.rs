//! Filters the catalog by an interpreted time budget and ranks by greenery.

use crate::catalog::RouteCatalog;
use crate::constants::ROUTE_BUFFER_MINUTES;
use crate::models::RouteRecord;
use crate::services::interpreter::parse_time_constraint;
use std::cmp::Reverse;

pub struct RecommendationEngine {
    catalog: RouteCatalog,
}

impl RecommendationEngine {
    pub fn new(catalog: RouteCatalog) -> Self {
        RecommendationEngine { catalog }
    }

    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    /// Recommend routes for a prompt, greenest first.
    ///
    /// A parsed time budget shrinks by [`ROUTE_BUFFER_MINUTES`] before
    /// filtering; a budget of zero is still a budget and filters everything.
    /// Without time language the whole catalog is eligible. The sort is
    /// stable, so equal greenery scores keep catalog order.
    pub fn recommend(&self, prompt: &str, max_results: usize) -> Vec<RouteRecord> {
        let time_constraint = parse_time_constraint(prompt);

        let mut eligible: Vec<&RouteRecord> = match time_constraint {
            Some(minutes) => {
                let max_duration = minutes.saturating_sub(ROUTE_BUFFER_MINUTES);
                self.catalog
                    .all()
                    .iter()
                    .filter(|r| r.duration_minutes <= max_duration)
                    .collect()
            }
            None => self.catalog.all().iter().collect(),
        };

        eligible.sort_by_key(|r| Reverse(r.greenery_score));

        eligible
            .into_iter()
            .take(max_results)
            .cloned()
            .collect()
    }
}
