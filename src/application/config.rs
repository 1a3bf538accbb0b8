use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_RATE_LIMIT_BURST_SIZE, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the CareerMate API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Session persistence configuration
    pub session: SessionConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the backend, including the `/api` prefix
    pub base_url: String,
    /// Default timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Where the session is persisted
pub struct SessionConfig {
    /// JSON file holding the session; `None` keeps it in memory only
    pub file: Option<String>,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment and an optional `.env` file
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `CAREERMATE_API_BASE_URL` | `http://localhost:8080/api` |
    /// | `CAREERMATE_API_TIMEOUT` | `30` |
    /// | `CAREERMATE_RATE_LIMIT_MAX_REQUESTS` | `100` |
    /// | `CAREERMATE_RATE_LIMIT_PERIOD_SECONDS` | `1` |
    /// | `CAREERMATE_RATE_LIMIT_BURST_SIZE` | `50` |
    /// | `CAREERMATE_SESSION_FILE` | unset (memory only) |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let timeout = get_env_or_default("CAREERMATE_API_TIMEOUT", DEFAULT_TIMEOUT_SECS);
        if timeout == 0 {
            warn!("CAREERMATE_API_TIMEOUT is 0, using {DEFAULT_TIMEOUT_SECS}");
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "CAREERMATE_API_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: if timeout == 0 { DEFAULT_TIMEOUT_SECS } else { timeout },
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "CAREERMATE_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "CAREERMATE_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "CAREERMATE_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
            session: SessionConfig {
                file: get_env_or_none("CAREERMATE_SESSION_FILE"),
            },
        }
    }

    /// Configuration for a given backend origin with default limits and in-memory sessions
    ///
    /// Does not read the environment.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            rate_limiter: RateLimiterConfig::default(),
            session: SessionConfig::default(),
        }
    }

    /// Default request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.rest_api.timeout)
    }
}
