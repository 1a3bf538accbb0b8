/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! Authenticated HTTP transport
//!
//! [`HttpClient`] is the single entry point for calls to the CareerMate backend. It
//! attaches `Authorization: Bearer <token>` when a session is held and recovers from
//! one HTTP 401 per request:
//!
//! 1. the request is sent with the token current at send time;
//! 2. on 401 the session is refreshed (or the refresh already completed by a concurrent
//!    request is reused);
//! 3. the request is re-issued once with the new token and its outcome is returned as
//!    is, so a second 401 surfaces as [`AppError::Http`];
//! 4. when no refresh is possible the session is destroyed and the caller receives
//!    [`AppError::AuthExpired`].
//!
//! Every other failure is returned to the caller without retrying.

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::{ApiResult, AppError};
use crate::model::auth::{AuthResponse, LoginRequest, OtpKind, RegisterRequest};
use crate::model::requests::{FilePart, Payload, RequestOptions};
use crate::model::responses::ApiErrorBody;
use crate::storage::{self, SessionStore};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Connection pieces shared by the session manager and the request path
#[derive(Clone, Debug)]
pub struct Transport {
    client: Client,
    rate_limiter: RateLimiter,
    base_url: String,
    timeout: Duration,
}

impl Transport {
    /// Builds the reqwest client and throttle described by `config`
    ///
    /// Fails with [`AppError::Config`] unless the base URL is an absolute http(s) URL.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let base_url = config.rest_api.base_url.trim().trim_end_matches('/');
        match reqwest::Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            Ok(url) => {
                return Err(AppError::Config(format!(
                    "unsupported base URL scheme {:?}",
                    url.scheme()
                )));
            }
            Err(e) => {
                return Err(AppError::Config(format!("invalid base URL {base_url:?}: {e}")));
            }
        }

        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(&config.rate_limiter),
            base_url: base_url.to_string(),
            timeout: config.timeout(),
        })
    }

    /// Absolute URL for an API path; absolute URLs pass through unchanged
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Default timeout applied when a request sets none
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Sends one request and returns the response when its status is 2xx
///
/// The throttle is awaited first. Caller headers from `options` are applied after
/// `headers`, replacing same-named values, except `Authorization`, which only the
/// transport sets. Non-success statuses become [`AppError::Http`] with the parsed
/// error body. Nothing is retried here.
///
/// # Example
///
/// ```ignore
/// let response = make_http_request(
///     &transport,
///     Method::GET,
///     &transport.url("/jobs"),
///     vec![("Accept", "application/json")],
///     &Payload::<()>::Empty,
///     &RequestOptions::new().paged(0, 10),
/// )
/// .await?;
/// ```
pub async fn make_http_request<B: Serialize + ?Sized>(
    transport: &Transport,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    payload: &Payload<'_, B>,
    options: &RequestOptions,
) -> Result<Response, AppError> {
    cancellable(
        options,
        send_request(transport, method, url, headers, payload, options),
    )
    .await
}

/// Runs `operation` unless the cancellation token in `options` fires first
pub(crate) async fn cancellable<T, F>(options: &RequestOptions, operation: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    if options.is_cancelled() {
        return Err(AppError::Cancelled);
    }
    match &options.cancel {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Request cancelled");
                Err(AppError::Cancelled)
            }
            result = operation => result,
        },
        None => operation.await,
    }
}

async fn send_request<B: Serialize + ?Sized>(
    transport: &Transport,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    payload: &Payload<'_, B>,
    options: &RequestOptions,
) -> Result<Response, AppError> {
    transport.rate_limiter.wait().await;

    debug!("{} {}", method, url);

    let mut header_map = HeaderMap::new();
    for (name, value) in headers {
        insert_header(&mut header_map, name, value)?;
    }
    for (name, value) in &options.headers {
        if name.eq_ignore_ascii_case(AUTHORIZATION.as_str()) {
            warn!("Ignoring caller-supplied Authorization header for {}", url);
            continue;
        }
        insert_header(&mut header_map, name, value)?;
    }

    let mut request = transport
        .client
        .request(method, url)
        .headers(header_map)
        .timeout(options.timeout.unwrap_or(transport.timeout));

    if !options.query.is_empty() {
        request = request.query(&options.query);
    }

    request = match payload {
        Payload::Empty => request,
        Payload::Json(body) => request.json(*body),
        Payload::File(part) => request.multipart(part.to_form()?),
    };

    let response = request.send().await?;

    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }
    Err(error_from_response(response).await)
}

fn insert_header(map: &mut HeaderMap, name: &str, value: &str) -> Result<(), AppError> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| AppError::InvalidInput(format!("invalid header name {name}: {e}")))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| AppError::InvalidInput(format!("invalid value for header {name}: {e}")))?;
    map.insert(name, value);
    Ok(())
}

/// Turns a non-success response into [`AppError::Http`]
pub async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if status == StatusCode::UNAUTHORIZED {
        debug!("Unauthorized: {}", text);
    } else {
        error!("Request failed with status {}: {}", status, text);
    }
    AppError::http(status, ApiErrorBody::parse(&text))
}

/// Decodes a success body; an empty body decodes as JSON `null`
pub async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let text = response.text().await?;
    let parsed = if text.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(&text)
    };
    parsed.map_err(|e| AppError::Deserialization(e.to_string()))
}

/// Client for the CareerMate API with bearer authentication and single refresh-and-retry
///
/// Cloning is cheap and clones share the session.
#[derive(Clone)]
pub struct HttpClient {
    auth: Arc<Auth>,
    transport: Transport,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a client, restoring any session persisted by the configured store
    pub fn new(config: Config) -> Result<Self, AppError> {
        let store = storage::from_config(&config.session);
        Self::with_store(config, store)
    }

    /// Creates a client backed by an explicit session store
    pub fn with_store(config: Config, store: Arc<dyn SessionStore>) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let transport = Transport::new(&config)?;
        let auth = Arc::new(Auth::new(transport.clone(), store));
        Ok(Self {
            auth,
            transport,
            config,
        })
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.get_with(path, &RequestOptions::default()).await
    }

    /// Makes a GET request with query parameters or other options
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> ApiResult<T> {
        self.request(Method::GET, path, None::<&()>, options).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::POST, path, Some(body), &RequestOptions::default())
            .await
    }

    /// Makes a POST request without a body, typically with query parameters
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> ApiResult<T> {
        self.request(Method::POST, path, None::<&()>, options).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::PUT, path, Some(body), &RequestOptions::default())
            .await
    }

    /// Makes a PUT request without a body
    pub async fn put_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> ApiResult<T> {
        self.request(Method::PUT, path, None::<&()>, options).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::DELETE, path, None::<&()>, &RequestOptions::default())
            .await
    }

    /// Makes a request with any method, optional JSON body and options
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> ApiResult<T> {
        self.execute(method, path, &Payload::from_option(body), options)
            .await
    }

    /// Uploads a file as `multipart/form-data` with a POST request
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        part: &FilePart,
        options: &RequestOptions,
    ) -> ApiResult<T> {
        self.execute(Method::POST, path, &Payload::<()>::File(part), options)
            .await
    }

    async fn execute<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: &Payload<'_, B>,
        options: &RequestOptions,
    ) -> ApiResult<T> {
        cancellable(options, self.execute_once_retried(method, path, payload, options)).await
    }

    async fn execute_once_retried<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: &Payload<'_, B>,
        options: &RequestOptions,
    ) -> ApiResult<T> {
        let url = self.transport.url(path);
        let token = self.auth.access_token().await;

        match self
            .send_once(method.clone(), &url, token.as_deref(), payload, options)
            .await
        {
            Ok(response) => parse_body(response).await,
            Err(AppError::Http { status, .. }) if status == StatusCode::UNAUTHORIZED => {
                warn!("{} {} returned 401, refreshing session and retrying once", method, path);
                let fresh = self.auth.recover(token.as_deref()).await?;
                let response = self
                    .send_once(method, &url, Some(&fresh), payload, options)
                    .await?;
                parse_body(response).await
            }
            Err(e) => Err(e),
        }
    }

    async fn send_once<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        token: Option<&str>,
        payload: &Payload<'_, B>,
        options: &RequestOptions,
    ) -> Result<Response, AppError> {
        let bearer = token.map(|t| format!("Bearer {t}"));
        let mut headers = vec![("Accept", "application/json")];
        if let Some(value) = bearer.as_deref() {
            headers.push(("Authorization", value));
        }
        make_http_request(&self.transport, method, url, headers, payload, options).await
    }

    /// Logs in and stores the returned session
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthResponse> {
        self.auth.login(credentials).await
    }

    /// Registers an account, storing a session when the response carries tokens
    pub async fn register(&self, user_data: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.auth.register(user_data).await
    }

    /// Confirms a one-time code, storing a session when the response carries tokens
    pub async fn verify_otp(&self, email: &str, otp: &str, kind: OtpKind) -> ApiResult<AuthResponse> {
        self.auth.verify_otp(email, otp, kind).await
    }

    /// Asks the backend to email a password reset code
    pub async fn forgot_password(&self, email: &str) -> ApiResult<()> {
        self.auth.forgot_password(email).await
    }

    /// Sets a new password using a reset code
    pub async fn reset_password(&self, email: &str, otp: &str, new_password: &str) -> ApiResult<()> {
        self.auth.reset_password(email, otp, new_password).await
    }

    /// Exchanges the refresh token for a new access token
    pub async fn refresh(&self) -> Option<String> {
        self.auth.refresh().await
    }

    /// Clears the local session
    pub async fn logout(&self) -> ApiResult<()> {
        self.auth.logout().await
    }

    /// Notifies the backend, then clears the local session
    pub async fn logout_remote(&self) -> ApiResult<()> {
        self.auth.logout_remote().await
    }

    /// Session manager
    #[must_use]
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.transport.base_url)
            .field("timeout", &self.transport.timeout)
            .finish()
    }
}
