use careermate_client::application::auth::{Auth, Session, SessionEvent};
use careermate_client::prelude::*;
use careermate_client::model::http::Transport;
use chrono::{Duration, Utc};
use std::sync::Arc;

fn auth_with(store: Arc<dyn SessionStore>) -> Auth {
    // Nothing listens here; these tests never reach the network
    let transport = Transport::new(&Config::with_base_url("http://127.0.0.1:9")).unwrap();
    Auth::new(transport, store)
}

fn response(access: &str, refresh: Option<&str>) -> AuthResponse {
    AuthResponse {
        access_token: Some(access.to_string()),
        refresh_token: refresh.map(str::to_string),
        expires_in: Some(3_600_000),
        user: Some(UserInfo {
            email: "a@b.c".to_string(),
            ..UserInfo::default()
        }),
        ..AuthResponse::default()
    }
}

#[test]
fn session_from_response_requires_access_token() {
    assert!(Session::from_auth_response(&AuthResponse::default()).is_none());

    let empty = AuthResponse {
        access_token: Some(String::new()),
        ..AuthResponse::default()
    };
    assert!(Session::from_auth_response(&empty).is_none());

    let session = Session::from_auth_response(&response("A1", Some("R1"))).unwrap();
    assert_eq!(session.access_token, "A1");
    assert_eq!(session.refresh_token.as_deref(), Some("R1"));
    assert!(!session.is_expired(None));
    let remaining = session.seconds_until_expiry().unwrap();
    assert!(remaining > 3_500 && remaining <= 3_600);
}

#[test]
fn session_expiry_margin() {
    let mut session = Session::from_auth_response(&response("A1", None)).unwrap();
    session.expires_at = Some(Utc::now() + Duration::seconds(30));
    assert!(session.is_expired(None));
    assert!(!session.is_expired(Some(0)));

    session.expires_at = None;
    assert!(!session.is_expired(None));
    assert!(session.seconds_until_expiry().is_none());
}

#[test]
fn session_debug_masks_tokens() {
    let session =
        Session::from_auth_response(&response("eyJhbGciOiJIUzI1NiJ9.payload", Some("refresh-secret")))
            .unwrap();
    let debug = format!("{session:?}");
    assert!(!debug.contains("payload"));
    assert!(!debug.contains("refresh-secret"));
}

#[tokio::test]
async fn create_stores_and_persists_session() {
    let store = Arc::new(MemoryStore::new());
    let auth = auth_with(store.clone());
    let mut events = auth.subscribe();

    assert!(auth.create(&response("A1", Some("R1"))).await);

    assert_eq!(auth.access_token().await.as_deref(), Some("A1"));
    assert_eq!(store.load().unwrap().unwrap().refresh_token.as_deref(), Some("R1"));
    assert_eq!(events.try_recv().unwrap(), SessionEvent::Created);
}

#[tokio::test]
async fn create_without_token_keeps_current_session() {
    let auth = auth_with(Arc::new(MemoryStore::new()));
    auth.create(&response("A1", Some("R1"))).await;

    assert!(!auth.create(&AuthResponse::default()).await);
    assert_eq!(auth.access_token().await.as_deref(), Some("A1"));
}

#[tokio::test]
async fn restores_persisted_session() {
    let store = MemoryStore::with_session(StoredSession {
        access_token: "A1".to_string(),
        refresh_token: Some("R1".to_string()),
        user: None,
        expires_at: None,
    });
    let auth = auth_with(Arc::new(store));

    assert!(auth.is_authenticated().await);
    assert_eq!(auth.refresh_token().await.as_deref(), Some("R1"));
}

#[tokio::test]
async fn logout_emits_destroyed_once() {
    let store = Arc::new(MemoryStore::new());
    let auth = auth_with(store.clone());
    auth.create(&response("A1", Some("R1"))).await;
    let mut events = auth.subscribe();

    auth.logout().await.unwrap();
    auth.logout().await.unwrap();

    assert_eq!(events.try_recv().unwrap(), SessionEvent::Destroyed);
    assert!(events.try_recv().is_err());
    assert!(store.load().unwrap().is_none());
    assert!(auth.session().await.is_none());
}

#[tokio::test]
async fn refresh_without_refresh_token_is_none() {
    let auth = auth_with(Arc::new(MemoryStore::new()));
    auth.create(&response("A1", None)).await;

    assert!(auth.refresh().await.is_none());
    assert_eq!(auth.access_token().await.as_deref(), Some("A1"));
}
