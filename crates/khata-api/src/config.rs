//! # Client Configuration
//!
//! Configuration for the backend client.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KHATA_*`)
//! 2. `.env` file in the working directory (development convenience)
//! 3. Defaults (this file)

use std::env;
use std::time::Duration;

use tracing::warn;

/// Default backend origin.
const DEFAULT_BASE_URL: &str = "https://api.khata.app";

/// Default per-request timeout, matching the app's historical 10s budget.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`crate::client::ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend origin, no trailing slash (e.g. "https://api.khata.app").
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Creates a config for the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: normalize_base_url(base_url.into()),
            ..ApiConfig::default()
        }
    }

    /// Builds configuration from the environment.
    ///
    /// ## Recognized Variables
    /// - `KHATA_API_URL` - backend origin
    /// - `KHATA_API_TIMEOUT_SECS` - per-request timeout in seconds
    ///
    /// Unset variables fall back to defaults; a malformed timeout is
    /// ignored with a warning rather than failing startup.
    pub fn from_env() -> Self {
        // Pull in a .env file when present; ignore when absent
        let _ = dotenvy::dotenv();

        let mut config = ApiConfig::default();

        if let Ok(url) = env::var("KHATA_API_URL") {
            config.base_url = normalize_base_url(url);
        }

        if let Ok(raw) = env::var("KHATA_API_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(value = %raw, "ignoring malformed KHATA_API_TIMEOUT_SECS"),
            }
        }

        config
    }
}

/// Endpoint paths all start with '/', so the origin must not end with one.
fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://api.khata.app");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ApiConfig::new("https://backend.example.com/");
        assert_eq!(config.base_url, "https://backend.example.com");
    }
}
