// Common utilities for integration tests

use careermate_client::prelude::*;
use mockito::{Mock, Server, ServerGuard};
use std::io::Write;
use std::sync::Arc;

/// Starts a mock backend
pub async fn server() -> ServerGuard {
    setup_logger();
    Server::new_async().await
}

/// Client pointed at the mock backend with an in-memory store
pub fn client(server: &ServerGuard) -> Client {
    client_with_store(server, Arc::new(MemoryStore::new()))
}

/// Client pointed at the mock backend with the given store
pub fn client_with_store(server: &ServerGuard, store: Arc<dyn SessionStore>) -> Client {
    let http = HttpClient::with_store(Config::with_base_url(server.url()), store)
        .expect("client builds");
    Client::from_http(http)
}

/// Client that already holds the given tokens
pub fn signed_in_client(server: &ServerGuard, access: &str, refresh: &str) -> Client {
    client_with_store(server, Arc::new(MemoryStore::with_session(stored(access, refresh))))
}

/// Persisted session with both tokens
pub fn stored(access: &str, refresh: &str) -> StoredSession {
    StoredSession {
        access_token: access.to_string(),
        refresh_token: Some(refresh.to_string()),
        user: None,
        expires_at: None,
    }
}

/// Auth response body carrying a token pair
pub fn token_body(access: &str, refresh: &str) -> String {
    serde_json::json!({
        "accessToken": access,
        "refreshToken": refresh,
        "tokenType": "Bearer",
        "expiresIn": 86_400_000,
        "user": {"id": "u-1", "email": "student@example.com", "fullName": "An", "role": "STUDENT"}
    })
    .to_string()
}

/// Mocks a successful refresh exchanging `refresh` for a new pair
pub async fn mock_refresh(server: &mut ServerGuard, refresh: &str, new_access: &str, new_refresh: &str) -> Mock {
    server
        .mock("POST", "/auth/refresh")
        .match_header("authorization", mockito::Matcher::Missing)
        .match_body(mockito::Matcher::Json(
            serde_json::json!({"refreshToken": refresh}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body(new_access, new_refresh))
        .create_async()
        .await
}

/// Collects every event currently buffered in a receiver
pub fn drain(rx: &mut tokio::sync::broadcast::Receiver<SessionEvent>) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Mocks a refresh that answers only after `delay`
pub async fn mock_slow_refresh(
    server: &mut ServerGuard,
    refresh: &str,
    new_access: &str,
    new_refresh: &str,
    delay: std::time::Duration,
) -> Mock {
    let body = token_body(new_access, new_refresh);
    server
        .mock("POST", "/auth/refresh")
        .match_body(mockito::Matcher::Json(
            serde_json::json!({"refreshToken": refresh}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_chunked_body(move |w| {
            std::thread::sleep(delay);
            w.write_all(body.as_bytes())
        })
        .create_async()
        .await
}
