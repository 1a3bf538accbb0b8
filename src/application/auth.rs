/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Session lifecycle for the CareerMate API
//!
//! [`Auth`] owns the access and refresh tokens. They are written only by `create`
//! (login, register, OTP verification), `refresh` and `destroy` (logout) and read by
//! every outgoing request. Refreshes are single-flight: concurrent requests that hit a
//! 401 wait on one refresh call instead of each spending the refresh token.

use crate::constants::{
    FORGOT_PASSWORD_PATH, LOGIN_PATH, LOGOUT_PATH, REFRESH_PATH, REGISTER_PATH,
    RESET_PASSWORD_PATH, SESSION_EVENT_CAPACITY, VERIFY_OTP_PATH,
};
use crate::error::{ApiResult, AppError};
use crate::model::auth::{
    AuthResponse, LoginRequest, OtpKind, RefreshRequest, RegisterRequest, ResetPasswordRequest,
    StoredSession, UserInfo,
};
use crate::model::http::{Transport, cancellable, make_http_request, parse_body};
use crate::model::requests::{Payload, RequestOptions};
use crate::storage::SessionStore;
use crate::utils::mask::mask_token;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock, broadcast};
use tracing::{debug, error, info, warn};

/// Tokens and profile of the signed-in user
#[derive(Clone, PartialEq)]
pub struct Session {
    /// Bearer credential attached to requests
    pub access_token: String,
    /// Credential exchanged for a new access token
    pub refresh_token: Option<String>,
    /// Cached user profile
    pub user: Option<UserInfo>,
    /// When the session was created or last refreshed
    pub created_at: DateTime<Utc>,
    /// Access token expiry reported by the backend
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Builds a session from an auth response that carries an access token
    #[must_use]
    pub fn from_auth_response(response: &AuthResponse) -> Option<Self> {
        let access_token = response.access_token.clone().filter(|t| !t.is_empty())?;
        let now = Utc::now();
        Some(Self {
            access_token,
            refresh_token: response.refresh_token.clone(),
            user: response.user.clone(),
            created_at: now,
            expires_at: response.expires_at(now),
        })
    }

    /// Checks if the access token is expired or will expire within the margin
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds (default: 60)
    ///
    /// Sessions without a known expiry never report as expired. The client does not act
    /// on this; refreshes happen only after a 401.
    #[must_use]
    pub fn is_expired(&self, margin_seconds: Option<i64>) -> bool {
        let Some(expires_at) = self.expires_at else {
            return false;
        };
        let margin_seconds = margin_seconds.unwrap_or(60);
        match chrono::TimeDelta::try_seconds(margin_seconds)
            .and_then(|margin| Utc::now().checked_add_signed(margin))
        {
            Some(deadline) => deadline >= expires_at,
            // a margin past the representable range covers any expiry
            None => margin_seconds > 0,
        }
    }

    /// Seconds until the access token expires; negative once expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> Option<i64> {
        self.expires_at
            .map(|expires_at| (expires_at - Utc::now()).num_seconds())
    }

    fn refreshed(&self, response: &AuthResponse, access_token: String) -> Self {
        let now = Utc::now();
        Self {
            access_token,
            refresh_token: response
                .refresh_token
                .clone()
                .or_else(|| self.refresh_token.clone()),
            user: response.user.clone().or_else(|| self.user.clone()),
            created_at: now,
            expires_at: response.expires_at(now),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &mask_token(&self.access_token))
            .field("refresh_token", &self.refresh_token.as_deref().map(mask_token))
            .field("user", &self.user)
            .field("created_at", &self.created_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Self {
            access_token: stored.access_token,
            refresh_token: stored.refresh_token,
            user: stored.user,
            created_at: Utc::now(),
            expires_at: stored.expires_at,
        }
    }
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        Self {
            access_token: session.access_token.clone(),
            refresh_token: session.refresh_token.clone(),
            user: session.user.clone(),
            expires_at: session.expires_at,
        }
    }
}

/// Session lifecycle notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Tokens were stored after login, registration or OTP verification
    Created,
    /// Tokens were replaced by a successful refresh
    Refreshed,
    /// The session was cleared; a UI should send the user to its login view
    Destroyed,
}

/// Session manager shared by every request of one client
pub struct Auth {
    transport: Transport,
    session: RwLock<Option<Session>>,
    store: Arc<dyn SessionStore>,
    refresh_guard: Mutex<()>,
    events: broadcast::Sender<SessionEvent>,
}

impl Auth {
    /// Creates a session manager, restoring any session held by `store`
    pub fn new(transport: Transport, store: Arc<dyn SessionStore>) -> Self {
        let restored = match store.load() {
            Ok(Some(stored)) => {
                info!("Restored persisted session");
                Some(Session::from(stored))
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Could not restore persisted session: {}", e);
                None
            }
        };
        let (events, _) = broadcast::channel(SESSION_EVENT_CAPACITY);

        Self {
            transport,
            session: RwLock::new(restored),
            store,
            refresh_guard: Mutex::new(()),
            events,
        }
    }

    /// Logs in with email and password
    ///
    /// Sent without an `Authorization` header. On success both tokens and the user are
    /// stored and the full response is returned.
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthResponse> {
        debug!("Logging in as {}", credentials.email);
        let response: AuthResponse = self
            .post_unauthenticated(LOGIN_PATH, Some(credentials), &RequestOptions::default())
            .await?;

        if !self.create(&response).await {
            warn!("Login response for {} carried no access token", credentials.email);
        }
        Ok(response)
    }

    /// Registers a new account
    ///
    /// Accounts awaiting OTP verification get no tokens; a session is stored only when
    /// the response carries them.
    pub async fn register(&self, user_data: &RegisterRequest) -> ApiResult<AuthResponse> {
        debug!("Registering {} as {}", user_data.email, user_data.role);
        let response: AuthResponse = self
            .post_unauthenticated(REGISTER_PATH, Some(user_data), &RequestOptions::default())
            .await?;

        if !self.create(&response).await {
            info!("Registered {}, awaiting verification", user_data.email);
        }
        Ok(response)
    }

    /// Confirms a one-time code sent by email
    pub async fn verify_otp(
        &self,
        email: &str,
        otp: &str,
        kind: OtpKind,
    ) -> ApiResult<AuthResponse> {
        let options = RequestOptions::new()
            .query("email", email)
            .query("otp", otp)
            .query("type", kind.as_str());
        let response: AuthResponse = self
            .post_unauthenticated(VERIFY_OTP_PATH, None::<&()>, &options)
            .await?;

        self.create(&response).await;
        Ok(response)
    }

    /// Asks the backend to email a password reset code
    pub async fn forgot_password(&self, email: &str) -> ApiResult<()> {
        let options = RequestOptions::new().query("email", email);
        self.post_unauthenticated(FORGOT_PASSWORD_PATH, None::<&()>, &options)
            .await
    }

    /// Sets a new password using an emailed reset code
    pub async fn reset_password(&self, email: &str, otp: &str, new_password: &str) -> ApiResult<()> {
        let body = ResetPasswordRequest {
            email: email.to_string(),
            otp: otp.to_string(),
            new_password: new_password.to_string(),
        };
        self.post_unauthenticated(RESET_PASSWORD_PATH, Some(&body), &RequestOptions::default())
            .await
    }

    /// Stores the session carried by an auth response
    ///
    /// Returns `false`, leaving the current session untouched, when the response has no
    /// access token.
    pub async fn create(&self, response: &AuthResponse) -> bool {
        let Some(session) = Session::from_auth_response(response) else {
            return false;
        };

        {
            let mut current = self.session.write().await;
            self.persist(&session);
            *current = Some(session);
        }
        let _ = self.events.send(SessionEvent::Created);

        match response.user.as_ref() {
            Some(user) => info!("Session created for {}", user.email),
            None => info!("Session created"),
        }
        true
    }

    /// Exchanges the refresh token for a new access token
    ///
    /// On success both tokens are replaced and the new access token is returned. On any
    /// failure `None` is returned and the stored session is left as it was. Waits for a
    /// refresh already in flight.
    pub async fn refresh(&self) -> Option<String> {
        let _guard = self.refresh_guard.lock().await;
        self.refresh_locked().await
    }

    /// Gets a usable token after a request carrying `stale` was rejected with 401
    ///
    /// Reuses a refresh completed while this caller waited for the guard. When no refresh
    /// is possible the session is destroyed and [`AppError::AuthExpired`] returned.
    pub(crate) async fn recover(&self, stale: Option<&str>) -> Result<String, AppError> {
        let _guard = self.refresh_guard.lock().await;

        match (self.access_token().await, stale) {
            (Some(current), stale) if Some(current.as_str()) != stale => {
                debug!("Session already refreshed by a concurrent request");
                return Ok(current);
            }
            (None, Some(_)) => {
                debug!("Session ended while waiting for refresh");
                return Err(AppError::AuthExpired);
            }
            _ => {}
        }

        match self.refresh_locked().await {
            Some(token) => Ok(token),
            None => {
                if let Some(current) = self.access_token().await {
                    if Some(current.as_str()) != stale {
                        debug!("Session replaced during failed refresh, keeping it");
                        return Ok(current);
                    }
                }
                warn!("Session refresh failed, logging out");
                if let Err(e) = self.logout().await {
                    error!("Failed to clear persisted session: {}", e);
                }
                Err(AppError::AuthExpired)
            }
        }
    }

    async fn refresh_locked(&self) -> Option<String> {
        let Some(refresh_token) = self.refresh_token().await else {
            warn!("No refresh token held, cannot refresh session");
            return None;
        };

        debug!("Refreshing session with {}", mask_token(&refresh_token));
        let body = RefreshRequest {
            refresh_token: refresh_token.clone(),
        };
        let response: AuthResponse = match self
            .post_unauthenticated(REFRESH_PATH, Some(&body), &RequestOptions::default())
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Refresh request failed: {}", e);
                return None;
            }
        };

        let Some(access_token) = response.access_token.clone().filter(|t| !t.is_empty()) else {
            warn!("Refresh response carried no access token");
            return None;
        };

        let mut current = self.session.write().await;
        let Some(previous) = current.as_ref() else {
            debug!("Session ended during refresh, discarding new tokens");
            return None;
        };
        if previous.refresh_token.as_deref() != Some(refresh_token.as_str()) {
            debug!("Session replaced during refresh, discarding new tokens");
            return Some(previous.access_token.clone());
        }
        let session = previous.refreshed(&response, access_token.clone());
        self.persist(&session);
        *current = Some(session);
        drop(current);

        let _ = self.events.send(SessionEvent::Refreshed);
        info!("Session refreshed");
        Some(access_token)
    }

    /// Clears both tokens and the cached user, locally and in the store
    ///
    /// Returns the store error, if any, after the in-memory session is cleared.
    pub async fn logout(&self) -> ApiResult<()> {
        let (previous, cleared) = {
            let mut current = self.session.write().await;
            (current.take(), self.store.clear())
        };

        if previous.is_some() {
            let _ = self.events.send(SessionEvent::Destroyed);
            info!("Logged out");
        }
        cleared
    }

    /// Tells the backend about the logout, then clears the local session
    ///
    /// The remote call is best effort; its failure is logged and the local session is
    /// cleared regardless.
    pub async fn logout_remote(&self) -> ApiResult<()> {
        if let Some(token) = self.access_token().await {
            let bearer = format!("Bearer {token}");
            let url = self.transport.url(LOGOUT_PATH);
            let result = make_http_request(
                &self.transport,
                Method::POST,
                &url,
                vec![("Accept", "application/json"), ("Authorization", bearer.as_str())],
                &Payload::<()>::Empty,
                &RequestOptions::default(),
            )
            .await;
            if let Err(e) = result {
                warn!("Remote logout failed: {}", e);
            }
        }
        self.logout().await
    }

    /// Current access token
    pub async fn access_token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    /// Current refresh token
    pub async fn refresh_token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .and_then(|s| s.refresh_token.clone())
    }

    /// Cached user profile
    pub async fn user(&self) -> Option<UserInfo> {
        self.session
            .read()
            .await
            .as_ref()
            .and_then(|s| s.user.clone())
    }

    /// Snapshot of the current session
    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Whether an access token is held
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Subscribes to session lifecycle events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn persist(&self, session: &Session) {
        if let Err(e) = self.store.save(&StoredSession::from(session)) {
            error!("Failed to persist session: {}", e);
        }
    }

    async fn post_unauthenticated<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> ApiResult<T> {
        let url = self.transport.url(path);
        cancellable(options, async {
            let response = make_http_request(
                &self.transport,
                Method::POST,
                &url,
                vec![("Accept", "application/json")],
                &Payload::from_option(body),
                options,
            )
            .await?;
            parse_body(response).await
        })
        .await
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}
