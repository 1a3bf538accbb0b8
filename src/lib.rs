//! # CareerMate Client
//!
//! An asynchronous client for the CareerMate REST API: job search and applications,
//! CV upload and AI analysis, company ratings, articles, courses, challenges,
//! subscription packages, recruiter dashboards and administration.
//!
//! ## Authentication
//!
//! Every request goes through [`model::http::HttpClient`], which attaches the current
//! bearer token, and on an HTTP 401 performs exactly one refresh of the session and
//! re-issues the request once with the new token. A refresh failure ends the session:
//! tokens are cleared and the caller receives [`error::AppError::AuthExpired`].
//!
//! Concurrent requests that hit a 401 at the same time share a single refresh call, so a
//! single-use refresh token is never spent twice.
//!
//! ## Example
//!
//! ```rust,no_run
//! use careermate_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::new())?;
//! client.http().login(&LoginRequest::new("student@example.com", "secret")).await?;
//!
//! let jobs = client.search_jobs(&JobSearchQuery::new().keyword("rust")).await?;
//! for job in jobs.content {
//!     println!("{}", job.title);
//! }
//! # Ok(())
//! # }
//! ```

/// Session lifecycle, configuration, throttling and the typed service facade
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models and the authenticated HTTP transport
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Domain models returned by the typed services
pub mod presentation;
/// Session persistence backends
pub mod storage;
/// Environment, logging and token helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
