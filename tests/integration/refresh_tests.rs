use crate::common;
use careermate_client::prelude::*;
use mockito::Matcher;
use reqwest::StatusCode;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_bearer_header_attached() {
    let mut server = common::server().await;
    let profile = server
        .mock("GET", "/students/profile")
        .match_header("authorization", "Bearer A1")
        .with_status(200)
        .with_body(r#"{"id":"s-1","fullName":"An"}"#)
        .create_async()
        .await;

    let client = common::signed_in_client(&server, "A1", "R1");
    let profile_body = client.get_profile().await.unwrap();

    profile.assert_async().await;
    assert_eq!(profile_body.full_name.as_deref(), Some("An"));
}

#[tokio::test]
async fn test_401_refreshes_once_and_retries_with_new_token() {
    let mut server = common::server().await;
    let rejected = server
        .mock("GET", "/jobs/7")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let refresh = common::mock_refresh(&mut server, "R1", "A2", "R2").await;
    let accepted = server
        .mock("GET", "/jobs/7")
        .match_header("authorization", "Bearer A2")
        .with_status(200)
        .with_body(r#"{"id":"7","title":"Backend Intern"}"#)
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemoryStore::with_session(common::stored("A1", "R1")));
    let client = common::client_with_store(&server, store.clone());
    let mut events = client.auth().subscribe();

    let job = client.get_job("7").await.unwrap();

    assert_eq!(job.title, "Backend Intern");
    rejected.assert_async().await;
    refresh.assert_async().await;
    accepted.assert_async().await;
    assert_eq!(client.auth().access_token().await.as_deref(), Some("A2"));
    assert_eq!(client.auth().refresh_token().await.as_deref(), Some("R2"));

    let persisted = store.load().unwrap().unwrap();
    assert_eq!(persisted.access_token, "A2");
    assert_eq!(persisted.refresh_token.as_deref(), Some("R2"));
    assert_eq!(common::drain(&mut events), vec![SessionEvent::Refreshed]);
}

#[tokio::test]
async fn test_refresh_failure_ends_session() {
    let mut server = common::server().await;
    let _rejected = server
        .mock("GET", "/notifications/unread-count")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(401)
        .with_body(r#"{"message":"Refresh token expired"}"#)
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemoryStore::with_session(common::stored("A1", "R1")));
    let client = common::client_with_store(&server, store.clone());
    let mut events = client.auth().subscribe();

    let error = client.get_unread_count().await.unwrap_err();

    refresh.assert_async().await;
    assert!(error.is_auth_expired());
    assert_eq!(error.user_message(), "Session expired. Please login again.");
    assert!(client.auth().access_token().await.is_none());
    assert!(client.auth().refresh_token().await.is_none());
    assert!(store.load().unwrap().is_none());
    assert_eq!(common::drain(&mut events), vec![SessionEvent::Destroyed]);
}

#[tokio::test]
async fn test_second_401_is_not_retried_again() {
    let mut server = common::server().await;
    let resource = server
        .mock("GET", "/packages")
        .with_status(401)
        .expect(2)
        .create_async()
        .await;
    let refresh = common::mock_refresh(&mut server, "R1", "A2", "R2").await;

    let client = common::signed_in_client(&server, "A1", "R1");
    let error = client.get_packages().await.unwrap_err();

    resource.assert_async().await;
    refresh.assert_async().await;
    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
    assert!(!error.is_auth_expired());
}

#[tokio::test]
async fn test_missing_refresh_token_ends_session_without_refresh_call() {
    let mut server = common::server().await;
    let _rejected = server
        .mock("GET", "/courses/my-enrollments")
        .with_status(401)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let store = MemoryStore::with_session(StoredSession {
        access_token: "A1".to_string(),
        refresh_token: None,
        user: None,
        expires_at: None,
    });
    let client = common::client_with_store(&server, Arc::new(store));

    let error = client.get_my_enrollments().await.unwrap_err();

    refresh.assert_async().await;
    assert!(error.is_auth_expired());
    assert!(!client.auth().is_authenticated().await);
}

#[tokio::test]
async fn test_anonymous_401_reports_auth_expired_without_event() {
    let mut server = common::server().await;
    let _rejected = server
        .mock("GET", "/challenges/my-badges")
        .with_status(401)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let client = common::client(&server);
    let mut events = client.auth().subscribe();
    let error = client.get_my_badges().await.unwrap_err();

    refresh.assert_async().await;
    assert!(error.is_auth_expired());
    assert!(common::drain(&mut events).is_empty());
}

#[tokio::test]
async fn test_concurrent_401s_share_one_refresh() {
    let mut server = common::server().await;
    let rejected = server
        .mock("GET", "/jobs/1")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .expect(2)
        .create_async()
        .await;
    let refresh = common::mock_refresh(&mut server, "R1", "A2", "R2").await;
    let accepted = server
        .mock("GET", "/jobs/1")
        .match_header("authorization", "Bearer A2")
        .with_status(200)
        .with_body(r#"{"id":"1","title":"Shared"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = common::signed_in_client(&server, "A1", "R1");
    let (first, second) = tokio::join!(client.get_job("1"), client.get_job("1"));

    assert!(first.is_ok());
    assert!(second.is_ok());
    rejected.assert_async().await;
    refresh.assert_async().await;
    accepted.assert_async().await;
    assert_eq!(client.auth().access_token().await.as_deref(), Some("A2"));
}

#[tokio::test]
async fn test_manual_refresh_failure_leaves_session() {
    let mut server = common::server().await;
    let _refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(500)
        .create_async()
        .await;

    let client = common::signed_in_client(&server, "A1", "R1");
    assert!(client.http().refresh().await.is_none());
    assert_eq!(client.auth().access_token().await.as_deref(), Some("A1"));
    assert_eq!(client.auth().refresh_token().await.as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_refresh_keeps_previous_refresh_token_when_omitted() {
    let mut server = common::server().await;
    let _refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(200)
        .with_body(r#"{"accessToken":"A2"}"#)
        .create_async()
        .await;

    let client = common::signed_in_client(&server, "A1", "R1");
    assert_eq!(client.http().refresh().await.as_deref(), Some("A2"));
    assert_eq!(client.auth().refresh_token().await.as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_upload_is_retried_with_rebuilt_form() {
    let mut server = common::server().await;
    let rejected = server
        .mock("POST", "/students/cv/upload")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let refresh = common::mock_refresh(&mut server, "R1", "A2", "R2").await;
    let accepted = server
        .mock("POST", "/students/cv/upload")
        .match_header("authorization", "Bearer A2")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::Regex("filename=\"cv.pdf\"".to_string()))
        .with_status(200)
        .with_body(r#"{"id":"cv-1","fileName":"cv.pdf"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = common::signed_in_client(&server, "A1", "R1");
    let part = FilePart::new("file", "cv.pdf", b"%PDF-1.4".to_vec()).with_mime_type("application/pdf");
    let cv = client.upload_cv(&part).await.unwrap();

    assert_eq!(cv.id, "cv-1");
    rejected.assert_async().await;
    refresh.assert_async().await;
    accepted.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_401s_with_failed_refresh_end_session_once() {
    let mut server = common::server().await;
    let _rejected = server
        .mock("GET", "/jobs/3")
        .with_status(401)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(401)
        .with_body(r#"{"message":"Refresh token expired"}"#)
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemoryStore::with_session(common::stored("A1", "R1")));
    let client = common::client_with_store(&server, store.clone());
    let mut events = client.auth().subscribe();

    let (first, second) = tokio::join!(client.get_job("3"), client.get_job("3"));

    refresh.assert_async().await;
    assert!(first.unwrap_err().is_auth_expired());
    assert!(second.unwrap_err().is_auth_expired());
    assert!(!client.auth().is_authenticated().await);
    assert!(store.load().unwrap().is_none());
    assert_eq!(common::drain(&mut events), vec![SessionEvent::Destroyed]);
}

#[tokio::test]
async fn test_refresh_result_dropped_when_session_replaced_by_login() {
    let mut server = common::server().await;
    let refresh = common::mock_slow_refresh(
        &mut server,
        "OLDR1",
        "OLD2",
        "OLDR2",
        Duration::from_millis(400),
    )
    .await;
    let _login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::token_body("NEW1", "NEWR1"))
        .create_async()
        .await;

    let store = Arc::new(MemoryStore::with_session(common::stored("OLD1", "OLDR1")));
    let client = common::client_with_store(&server, store.clone());
    let background = client.clone();
    let pending = tokio::spawn(async move { background.http().refresh().await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    client
        .http()
        .login(&LoginRequest::new("other@example.com", "pw"))
        .await
        .unwrap();

    let refreshed = pending.await.unwrap();

    refresh.assert_async().await;
    assert_eq!(refreshed.as_deref(), Some("NEW1"));
    assert_eq!(client.auth().access_token().await.as_deref(), Some("NEW1"));
    assert_eq!(client.auth().refresh_token().await.as_deref(), Some("NEWR1"));
    let persisted = store.load().unwrap().unwrap();
    assert_eq!(persisted.access_token, "NEW1");
    assert_eq!(persisted.refresh_token.as_deref(), Some("NEWR1"));
}

#[tokio::test]
async fn test_refresh_result_dropped_after_logout() {
    let mut server = common::server().await;
    let refresh = common::mock_slow_refresh(
        &mut server,
        "R1",
        "A2",
        "R2",
        Duration::from_millis(400),
    )
    .await;

    let store = Arc::new(MemoryStore::with_session(common::stored("A1", "R1")));
    let client = common::client_with_store(&server, store.clone());
    let mut events = client.auth().subscribe();
    let background = client.clone();
    let pending = tokio::spawn(async move { background.http().refresh().await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    client.http().logout().await.unwrap();

    let refreshed = pending.await.unwrap();

    refresh.assert_async().await;
    assert!(refreshed.is_none());
    assert!(!client.auth().is_authenticated().await);
    assert!(store.load().unwrap().is_none());
    assert_eq!(common::drain(&mut events), vec![SessionEvent::Destroyed]);
}

#[tokio::test]
async fn test_failed_refresh_keeps_session_created_meanwhile() {
    let mut server = common::server().await;
    let _rejected = server
        .mock("GET", "/jobs/5")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .create_async()
        .await;
    let _refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(401)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_millis(400));
            w.write_all(br#"{"message":"Refresh token expired"}"#)
        })
        .create_async()
        .await;
    let _login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(common::token_body("NEW1", "NEWR1"))
        .create_async()
        .await;
    let accepted = server
        .mock("GET", "/jobs/5")
        .match_header("authorization", "Bearer NEW1")
        .with_status(200)
        .with_body(r#"{"id":"5","title":"Kept"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = common::signed_in_client(&server, "A1", "R1");
    let mut events = client.auth().subscribe();
    let background = client.clone();
    let pending = tokio::spawn(async move { background.get_job("5").await });

    tokio::time::sleep(Duration::from_millis(150)).await;
    client
        .http()
        .login(&LoginRequest::new("other@example.com", "pw"))
        .await
        .unwrap();

    let job = pending.await.unwrap().unwrap();

    accepted.assert_async().await;
    assert_eq!(job.title, "Kept");
    assert_eq!(client.auth().access_token().await.as_deref(), Some("NEW1"));
    assert_eq!(common::drain(&mut events), vec![SessionEvent::Created]);
}
