/// Session management and the authentication endpoints
pub mod auth;
/// High level client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces, one trait per backend area
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Service implementations for [`client::Client`]
pub mod services;
