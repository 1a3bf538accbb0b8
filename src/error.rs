//! Error types for the CareerMate client
//!
//! Callers get one of three outcomes from a failed request: the session could not be
//! recovered ([`AppError::AuthExpired`]), the server answered with a non-success status
//! ([`AppError::Http`]), or no answer arrived at all ([`AppError::Network`]). The other
//! variants cover local failures.

use crate::constants::{GENERIC_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE, SESSION_EXPIRED_MESSAGE};
use crate::model::responses::ApiErrorBody;
use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used across the crate
pub type ApiResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The session expired and could not be refreshed; local tokens have been cleared
    #[error("session expired")]
    AuthExpired,

    /// The server answered with a non-success status
    #[error("http error {status}{}", describe_body(.body))]
    Http {
        /// Response status
        status: StatusCode,
        /// Structured error body, when the server sent one that parses
        body: Option<ApiErrorBody>,
    },

    /// No response was received (DNS, connection refused, timeout)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request was cancelled through its cancellation token
    #[error("request cancelled")]
    Cancelled,

    /// JSON encoding or decoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A response body did not match the expected shape
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// The caller supplied an unusable argument
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The session store failed to load, save or clear
    #[error("session storage error: {0}")]
    Storage(String),

    /// Local I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

fn describe_body(body: &Option<ApiErrorBody>) -> String {
    match body.as_ref().and_then(ApiErrorBody::best_message) {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Deserialization(err.to_string())
        } else {
            AppError::Network(err)
        }
    }
}

impl AppError {
    /// Builds an HTTP error from a status and an optional body
    #[must_use]
    pub fn http(status: StatusCode, body: Option<ApiErrorBody>) -> Self {
        AppError::Http { status, body }
    }

    /// Status code of an HTTP error
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server answered 404
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Whether the session ended and the user must log in again
    #[must_use]
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, AppError::AuthExpired)
    }

    /// Whether the request timed out before a response arrived
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Network(e) if e.is_timeout())
    }

    /// Message suitable for showing to an end user
    ///
    /// HTTP errors use the message from the structured body and fall back to a generic
    /// message when the body is missing or unparseable.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AppError::AuthExpired => SESSION_EXPIRED_MESSAGE.to_string(),
            AppError::Http { body, .. } => body
                .as_ref()
                .and_then(ApiErrorBody::best_message)
                .unwrap_or(GENERIC_ERROR_MESSAGE)
                .to_string(),
            AppError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
