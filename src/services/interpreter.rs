//! Extracts time budgets and distance targets from free-form prompts.
//!
//! Matching is an ordered regex cascade over the lower-cased prompt; the
//! first rule that fires wins and later rules are not consulted.

use crate::constants::{
    MAX_ESTIMATED_DISTANCE_KM, MAX_TIME_CONSTRAINT_MINUTES, WALKING_MINUTES_PER_KM,
};
use crate::services::intent::DistanceIntent;
use regex::Regex;
use std::sync::{Arc, LazyLock};

static MINUTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:minutes?|mins?)").expect("valid minutes pattern"));
static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:hours?|hrs?)").expect("valid hours pattern"));
static HALF_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"half\s*(?:an\s*)?hour").expect("valid half-hour pattern"));
static QUARTER_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"quarter\s*hour").expect("valid quarter-hour pattern"));
static LUNCH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"lunch\s*break").expect("valid lunch-break pattern"));
static DISTANCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:kilometers?|kilometres?|km|k)\b")
        .expect("valid distance pattern")
});

/// Extract a time budget in minutes from a prompt.
///
/// Returns `None` when the prompt carries no time language. Values are capped
/// at 24 hours; numbers too large to parse resolve to the cap as well.
pub fn parse_time_constraint(prompt: &str) -> Option<u32> {
    let prompt = prompt.to_lowercase();

    if let Some(caps) = MINUTES_RE.captures(&prompt) {
        let minutes = caps[1]
            .parse::<u32>()
            .map_or(MAX_TIME_CONSTRAINT_MINUTES, |m| {
                m.min(MAX_TIME_CONSTRAINT_MINUTES)
            });
        return Some(minutes);
    }

    if let Some(caps) = HOURS_RE.captures(&prompt) {
        let minutes = caps[1]
            .parse::<u32>()
            .map_or(MAX_TIME_CONSTRAINT_MINUTES, |h| {
                h.saturating_mul(60).min(MAX_TIME_CONSTRAINT_MINUTES)
            });
        return Some(minutes);
    }

    if HALF_HOUR_RE.is_match(&prompt) {
        return Some(30);
    }

    if QUARTER_HOUR_RE.is_match(&prompt) {
        return Some(15);
    }

    // "lunch break" with no explicit duration: assume 30 minutes.
    if LUNCH_BREAK_RE.is_match(&prompt) {
        return Some(30);
    }

    None
}

/// Resolves a desired route length from a prompt.
///
/// Holds the optional distance-intent collaborator; when its credentials are
/// absent a [`DisabledIntentClient`](crate::services::intent::DisabledIntentClient)
/// is substituted and inference is skipped.
pub struct PromptInterpreter {
    intent: Arc<dyn DistanceIntent>,
}

impl PromptInterpreter {
    pub fn new(intent: Arc<dyn DistanceIntent>) -> Self {
        PromptInterpreter { intent }
    }

    /// Extract a desired route length in kilometers from a prompt.
    ///
    /// Resolution order: explicit "<n> km" wording, then the intent
    /// collaborator, then an estimate from the time budget at average walking
    /// pace. `None` means the caller should use its own default.
    pub async fn extract_route_length(&self, prompt: &str) -> Option<f64> {
        let lowered = prompt.to_lowercase();

        if let Some(caps) = DISTANCE_RE.captures(&lowered) {
            if let Ok(km) = caps[1].parse::<f64>() {
                return Some(km);
            }
        }

        if let Some(km) = self.intent.infer_distance_km(prompt).await {
            tracing::debug!("Intent service inferred {:.1}km from prompt", km);
            return Some(km);
        }

        parse_time_constraint(&lowered)
            .map(|minutes| (minutes as f64 / WALKING_MINUTES_PER_KM).min(MAX_ESTIMATED_DISTANCE_KM))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::intent::DisabledIntentClient;

    fn interpreter() -> PromptInterpreter {
        PromptInterpreter::new(Arc::new(DisabledIntentClient))
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_time_constraint("a walk for 10 minutes"), Some(10));
        assert_eq!(parse_time_constraint("45 mins around the block"), Some(45));
        assert_eq!(parse_time_constraint("1 minute"), Some(1));
        assert_eq!(parse_time_constraint("0 minutes"), Some(0));
    }

    #[test]
    fn test_parse_minutes_caps_at_24_hours() {
        assert_eq!(parse_time_constraint("1500 minutes"), Some(1440));
        assert_eq!(parse_time_constraint("1440 minutes"), Some(1440));
        // Too large for u32: still resolves to the cap.
        assert_eq!(
            parse_time_constraint("99999999999999999999 minutes"),
            Some(1440)
        );
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_time_constraint("2 hours of fresh air"), Some(120));
        assert_eq!(parse_time_constraint("3 hrs"), Some(180));
        assert_eq!(parse_time_constraint("100 hours"), Some(1440));
    }

    #[test]
    fn test_parse_word_patterns() {
        assert_eq!(parse_time_constraint("half an hour stroll"), Some(30));
        assert_eq!(parse_time_constraint("a half hour"), Some(30));
        assert_eq!(parse_time_constraint("a quarter hour"), Some(15));
        assert_eq!(parse_time_constraint("during my lunch break"), Some(30));
        assert_eq!(parse_time_constraint("LUNCH BREAK"), Some(30));
    }

    #[test]
    fn test_rule_order_minutes_before_hours() {
        // Both wordings present: the minutes rule fires first.
        assert_eq!(
            parse_time_constraint("90 minutes, or maybe 2 hours"),
            Some(90)
        );
        // Hours rule fires before the half-hour rule.
        assert_eq!(
            parse_time_constraint("2 hours rather than half an hour"),
            Some(120)
        );
    }

    #[test]
    fn test_no_time_language() {
        assert_eq!(parse_time_constraint("a lovely green walk"), None);
        assert_eq!(parse_time_constraint(""), None);
    }

    #[tokio::test]
    async fn test_extract_explicit_distance() {
        let interp = interpreter();
        assert_eq!(interp.extract_route_length("a 5 km walk").await, Some(5.0));
        assert_eq!(interp.extract_route_length("2.5km loop").await, Some(2.5));
        assert_eq!(interp.extract_route_length("about 3 k").await, Some(3.0));
        assert_eq!(
            interp.extract_route_length("4 kilometers please").await,
            Some(4.0)
        );
        // Explicit distances are not capped at this stage.
        assert_eq!(interp.extract_route_length("50 km trek").await, Some(50.0));
    }

    #[tokio::test]
    async fn test_extract_distance_from_time_budget() {
        let interp = interpreter();
        // 30 minutes at 15 min/km.
        assert_eq!(
            interp.extract_route_length("a 30 minute walk").await,
            Some(2.0)
        );
        // 4 hours would estimate 16km; capped at 15.
        assert_eq!(
            interp.extract_route_length("4 hours outside").await,
            Some(15.0)
        );
    }

    #[tokio::test]
    async fn test_extract_distance_no_hints() {
        let interp = interpreter();
        assert_eq!(interp.extract_route_length("somewhere green").await, None);
    }

    #[tokio::test]
    async fn test_explicit_distance_wins_over_time_budget() {
        let interp = interpreter();
        assert_eq!(
            interp
                .extract_route_length("a 5 km walk in 30 minutes")
                .await,
            Some(5.0)
        );
    }
}
