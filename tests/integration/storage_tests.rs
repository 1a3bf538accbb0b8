use crate::common;
use careermate_client::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

fn session_file(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir()
        .join(format!("careermate-it-{}-{}-{}", name, std::process::id(), nanos))
        .join("session.json")
}

#[tokio::test]
async fn test_session_survives_client_restart() {
    let mut server = common::server().await;
    let _login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(common::token_body("A1", "R1"))
        .create_async()
        .await;
    let profile = server
        .mock("GET", "/students/profile")
        .match_header("authorization", "Bearer A1")
        .with_status(200)
        .with_body(r#"{"fullName":"An"}"#)
        .create_async()
        .await;

    let path = session_file("restart");
    let first = common::client_with_store(&server, Arc::new(FileStore::new(&path)));
    first
        .http()
        .login(&LoginRequest::new("student@example.com", "secret"))
        .await
        .unwrap();
    drop(first);

    let second = common::client_with_store(&server, Arc::new(FileStore::new(&path)));
    assert_eq!(second.auth().access_token().await.as_deref(), Some("A1"));
    assert_eq!(
        second.auth().user().await.map(|u| u.email),
        Some("student@example.com".to_string())
    );
    second.get_profile().await.unwrap();
    profile.assert_async().await;

    second.http().logout().await.unwrap();
    assert!(!path.exists());
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[tokio::test]
async fn test_refreshed_tokens_are_written_through() {
    let mut server = common::server().await;
    let _rejected = server
        .mock("GET", "/challenges/my-participations")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .create_async()
        .await;
    let _refresh = common::mock_refresh(&mut server, "R1", "A2", "R2").await;
    let _accepted = server
        .mock("GET", "/challenges/my-participations")
        .match_header("authorization", "Bearer A2")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let path = session_file("refresh");
    let store = FileStore::new(&path);
    store.save(&common::stored("A1", "R1")).unwrap();

    let client = common::client_with_store(&server, Arc::new(store.clone()));
    let participations = client.get_my_participations().await.unwrap();
    assert!(participations.is_empty());

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["accessToken"], "A2");
    assert_eq!(raw["refreshToken"], "R2");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[tokio::test]
async fn test_corrupt_session_file_starts_signed_out() {
    let server = common::server().await;
    let path = session_file("corrupt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{not json").unwrap();

    let client = common::client_with_store(&server, Arc::new(FileStore::new(&path)));
    assert!(!client.auth().is_authenticated().await);
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
