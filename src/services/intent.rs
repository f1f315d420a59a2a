use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Infers a desired route length from free-form text.
///
/// Implementations must treat every failure as "no preference": the
/// interpreter falls through to its own heuristics and the request proceeds.
#[async_trait]
pub trait DistanceIntent: Send + Sync {
    /// Returns a kilometer estimate, or `None` when the text expresses no
    /// distance preference.
    async fn infer_distance_km(&self, prompt: &str) -> Option<f64>;
}

/// Stand-in used when intent service credentials are not configured.
pub struct DisabledIntentClient;

#[async_trait]
impl DistanceIntent for DisabledIntentClient {
    async fn infer_distance_km(&self, _prompt: &str) -> Option<f64> {
        None
    }
}

/// Client for the hosted language-understanding endpoint.
pub struct HttpIntentClient {
    client: Client,
    api_url: String,
    api_key: String,
    timeout: Duration,
}

impl HttpIntentClient {
    pub fn new(api_url: String, api_key: String, timeout_secs: u64) -> Self {
        HttpIntentClient {
            client: Client::new(),
            api_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    async fn fetch_estimate(&self, prompt: &str) -> Result<IntentEstimate> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&json!({ "prompt": prompt }))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::IntentApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::IntentApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::IntentApi(format!("Failed to parse response: {}", e)))
    }
}

#[derive(Debug, Deserialize)]
struct IntentEstimate {
    /// Kilometer estimate. Absent or non-positive means "no preference".
    distance_km: Option<f64>,
}

#[async_trait]
impl DistanceIntent for HttpIntentClient {
    async fn infer_distance_km(&self, prompt: &str) -> Option<f64> {
        match self.fetch_estimate(prompt).await {
            Ok(estimate) => estimate.distance_km.filter(|km| *km > 0.0),
            Err(e) => {
                tracing::warn!("Intent service unavailable, skipping inference: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_client_returns_none() {
        let client = DisabledIntentClient;
        assert_eq!(client.infer_distance_km("a long walk").await, None);
    }

    #[tokio::test]
    async fn test_http_client_absorbs_connection_errors() {
        // Nothing listens on this port; the failure must become None.
        let client = HttpIntentClient::new(
            "http://127.0.0.1:9/v1/estimate".to_string(),
            "test-key".to_string(),
            1,
        );
        assert_eq!(client.infer_distance_km("a long walk").await, None);
    }

    #[test]
    fn test_estimate_sentinel_values() {
        let estimate: IntentEstimate = serde_json::from_str(r#"{"distance_km": 4.5}"#).unwrap();
        assert_eq!(estimate.distance_km.filter(|km| *km > 0.0), Some(4.5));

        let estimate: IntentEstimate = serde_json::from_str(r#"{"distance_km": null}"#).unwrap();
        assert_eq!(estimate.distance_km.filter(|km| *km > 0.0), None);

        let estimate: IntentEstimate = serde_json::from_str(r#"{"distance_km": -1.0}"#).unwrap();
        assert_eq!(estimate.distance_km.filter(|km| *km > 0.0), None);

        let estimate: IntentEstimate = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(estimate.distance_km.filter(|km| *km > 0.0), None);
    }
}
