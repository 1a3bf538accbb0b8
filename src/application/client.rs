/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::HttpClient;
use std::sync::Arc;

/// High level CareerMate client
///
/// Implements the service traits in [`crate::application::interfaces`] on top of a
/// shared [`HttpClient`]. Authentication calls go through [`Client::http`].
#[derive(Clone, Debug)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client, restoring any persisted session
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self::from_http(HttpClient::new(config)?))
    }

    /// Wraps an existing HTTP client
    #[must_use]
    pub fn from_http(http_client: HttpClient) -> Self {
        Self {
            http_client: Arc::new(http_client),
        }
    }

    /// Underlying HTTP client
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    /// Session manager
    #[must_use]
    pub fn auth(&self) -> &Auth {
        self.http_client.auth()
    }
}
