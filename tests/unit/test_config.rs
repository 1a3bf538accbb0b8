use careermate_client::application::config::{Config, RateLimiterConfig};
use careermate_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use careermate_client::storage::{self, SessionStore};
use std::time::Duration;

#[test]
fn test_config_reads_environment() {
    // SAFETY: this is the only test in this binary that touches these variables
    unsafe {
        std::env::set_var("CAREERMATE_API_BASE_URL", "https://careermate.example.com/api");
        std::env::set_var("CAREERMATE_API_TIMEOUT", "0");
        std::env::set_var("CAREERMATE_RATE_LIMIT_MAX_REQUESTS", "5");
        std::env::set_var("CAREERMATE_SESSION_FILE", "   ");
    }

    let config = Config::new();

    assert_eq!(config.rest_api.base_url, "https://careermate.example.com/api");
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.rate_limiter.max_requests, 5);
    assert!(config.session.file.is_none());

    unsafe {
        std::env::remove_var("CAREERMATE_API_BASE_URL");
        std::env::remove_var("CAREERMATE_API_TIMEOUT");
        std::env::remove_var("CAREERMATE_RATE_LIMIT_MAX_REQUESTS");
        std::env::remove_var("CAREERMATE_SESSION_FILE");
    }
}

#[test]
fn test_config_serialization_round_trip() {
    let config = Config::with_base_url(DEFAULT_BASE_URL);
    let json = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
    assert_eq!(back.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
}

#[test]
fn test_store_selected_from_config() {
    let mut config = Config::with_base_url(DEFAULT_BASE_URL);
    let memory = storage::from_config(&config.session);
    assert!(memory.load().unwrap().is_none());

    let path = std::env::temp_dir().join(format!("careermate-unit-{}.json", std::process::id()));
    config.session.file = Some(path.to_string_lossy().into_owned());
    let file = storage::from_config(&config.session);
    assert!(file.load().unwrap().is_none());
}

#[test]
fn test_rate_limiter_defaults_are_positive() {
    let limits = RateLimiterConfig::default();
    assert!(limits.max_requests > 0);
    assert!(limits.period_seconds > 0);
    assert!(limits.burst_size > 0);
}
