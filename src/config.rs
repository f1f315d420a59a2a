use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub osrm_base_url: String,
    pub routing_timeout_secs: u64,
    /// Intent service endpoint and key. Both optional: when either is absent
    /// the interpreter skips distance inference entirely.
    pub intent_api_url: Option<String>,
    pub intent_api_key: Option<String>,
    pub intent_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let routing_timeout_secs: u64 = env::var("ROUTING_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_ROUTING_TIMEOUT_SECONDS.to_string())
            .parse()
            .map_err(|_| "Invalid ROUTING_TIMEOUT_SECS")?;

        if routing_timeout_secs == 0 {
            return Err("ROUTING_TIMEOUT_SECS must be greater than 0".to_string());
        }

        let intent_timeout_secs: u64 = env::var("INTENT_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_INTENT_TIMEOUT_SECONDS.to_string())
            .parse()
            .map_err(|_| "Invalid INTENT_TIMEOUT_SECS")?;

        if intent_timeout_secs == 0 {
            return Err("INTENT_TIMEOUT_SECS must be greater than 0".to_string());
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            osrm_base_url: env::var("OSRM_BASE_URL")
                .unwrap_or_else(|_| crate::services::osrm::OSRM_PUBLIC_BASE_URL.to_string()),
            routing_timeout_secs,
            intent_api_url: env::var("INTENT_API_URL").ok(),
            intent_api_key: env::var("INTENT_API_KEY").ok(),
            intent_timeout_secs,
        })
    }

    /// True when both intent service credentials are present.
    pub fn intent_configured(&self) -> bool {
        self.intent_api_url.is_some() && self.intent_api_key.is_some()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
