/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Client-side request throttle
//!
//! Paces outgoing requests with a `governor` token bucket so a burst of calls from the
//! application does not flood the backend. It never retries; callers simply wait for a
//! free cell.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token bucket shared by every request issued from one client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a rate limiter allowing `max_requests` per `period_seconds`
    ///
    /// Zero values fall back to one request per second and a burst equal to
    /// `max_requests`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use careermate_client::application::config::RateLimiterConfig;
    /// use careermate_client::application::rate_limiter::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(&RateLimiterConfig {
    ///     max_requests: 60,
    ///     period_seconds: 60,
    ///     burst_size: 10,
    /// });
    /// assert!(limiter.check());
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(max_requests);
        let period = Duration::from_secs(config.period_seconds.max(1));

        let quota = Quota::with_period(period / max_requests.get())
            .unwrap_or_else(|| Quota::per_second(max_requests))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until the bucket allows another request
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Takes a cell if one is free right now
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
