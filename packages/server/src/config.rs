use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use dotenvy::dotenv;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Real search backend endpoint. When unset, the simulated backend
    /// serves results.
    pub search_backend_url: Option<String>,
    /// Artificial latency of the simulated backend.
    pub simulated_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let simulated_delay_ms: u64 = env::var("SIMULATED_DELAY_MS")
            .unwrap_or_else(|_| "2000".to_string())
            .parse()
            .context("SIMULATED_DELAY_MS must be a valid number")?;

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            search_backend_url: env::var("SEARCH_BACKEND_URL").ok(),
            simulated_delay: Duration::from_millis(simulated_delay_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_empty() {
        env::remove_var("PORT");
        env::remove_var("SIMULATED_DELAY_MS");
        env::remove_var("SEARCH_BACKEND_URL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.simulated_delay, Duration::from_millis(2000));
        assert!(config.search_backend_url.is_none());
    }
}
