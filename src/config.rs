//! Configuration Module
//!
//! Handles loading and managing Pokedex configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI base URL
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the PokeAPI, without trailing slash
    pub api_base_url: String,
    /// Cache retention and sweep interval in seconds
    pub cache_interval: u64,
    /// Location areas listed per `map` page
    pub page_size: u32,
    /// HTTP request timeout in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - PokeAPI base URL (default: https://pokeapi.co/api/v2)
    /// - `CACHE_INTERVAL` - Cache retention in seconds (default: 5)
    /// - `PAGE_SIZE` - Location areas per page (default: 20)
    /// - `REQUEST_TIMEOUT` - HTTP timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            cache_interval: env::var("CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(defaults.cache_interval),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(defaults.page_size),
            request_timeout: env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(defaults.request_timeout),
        }
    }

    /// Cache retention as a Duration.
    pub fn cache_retention(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    /// Request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_interval: 5,
            page_size: 20,
            request_timeout: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_interval, 5);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.cache_retention(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("CACHE_INTERVAL");
        env::remove_var("PAGE_SIZE");
        env::remove_var("REQUEST_TIMEOUT");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.cache_interval, 5);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.request_timeout, 10);

        // Zero would disable the sweep or time out every request
        env::set_var("CACHE_INTERVAL", "0");
        env::set_var("PAGE_SIZE", "0");
        env::set_var("REQUEST_TIMEOUT", "0");

        let config = Config::from_env();
        assert_eq!(config.cache_interval, 5);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.request_timeout, 10);

        env::remove_var("CACHE_INTERVAL");
        env::remove_var("PAGE_SIZE");
        env::remove_var("REQUEST_TIMEOUT");
    }
}
