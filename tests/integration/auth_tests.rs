use crate::common;
use careermate_client::prelude::*;
use mockito::Matcher;

#[tokio::test]
async fn test_login_stores_tokens_without_authorization_header() {
    let mut server = common::server().await;
    let login = server
        .mock("POST", "/auth/login")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(
            serde_json::json!({"email": "student@example.com", "password": "secret"}),
        ))
        .with_status(200)
        .with_body(common::token_body("A1", "R1"))
        .create_async()
        .await;

    let client = common::client(&server);
    let mut events = client.auth().subscribe();
    let response = client
        .http()
        .login(&LoginRequest::new("student@example.com", "secret"))
        .await
        .unwrap();

    login.assert_async().await;
    assert!(response.has_tokens());
    assert_eq!(client.auth().access_token().await.as_deref(), Some("A1"));
    assert_eq!(client.auth().refresh_token().await.as_deref(), Some("R1"));
    let user = client.auth().user().await.unwrap();
    assert!(user.has_role(UserRole::Student));
    assert_eq!(common::drain(&mut events), vec![SessionEvent::Created]);
}

#[tokio::test]
async fn test_login_is_unauthenticated_even_when_signed_in() {
    let mut server = common::server().await;
    let login = server
        .mock("POST", "/auth/login")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(common::token_body("A9", "R9"))
        .create_async()
        .await;

    let client = common::signed_in_client(&server, "A1", "R1");
    client
        .http()
        .login(&LoginRequest::new("other@example.com", "pw"))
        .await
        .unwrap();

    login.assert_async().await;
    assert_eq!(client.auth().access_token().await.as_deref(), Some("A9"));
}

#[tokio::test]
async fn test_failed_login_keeps_state_and_reports_message() {
    let mut server = common::server().await;
    let _login = server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_body(r#"{"message":"Invalid email or password"}"#)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let client = common::client(&server);
    let error = client
        .http()
        .login(&LoginRequest::new("student@example.com", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
    assert_eq!(error.user_message(), "Invalid email or password");
    assert!(!client.auth().is_authenticated().await);
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_register_without_tokens_stores_nothing() {
    let mut server = common::server().await;
    let register = server
        .mock("POST", "/auth/register")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::PartialJson(
            serde_json::json!({"email": "new@example.com", "fullName": "Chi", "role": "RECRUITER"}),
        ))
        .with_status(200)
        .with_body(r#"{"message":"Check your email","user":{"email":"new@example.com"}}"#)
        .create_async()
        .await;

    let client = common::client(&server);
    let mut events = client.auth().subscribe();
    let response = client
        .http()
        .register(&RegisterRequest::new("new@example.com", "pw", "Chi", UserRole::Recruiter))
        .await
        .unwrap();

    register.assert_async().await;
    assert_eq!(response.message.as_deref(), Some("Check your email"));
    assert!(!client.auth().is_authenticated().await);
    assert!(common::drain(&mut events).is_empty());
}

#[tokio::test]
async fn test_verify_otp_sends_query_and_stores_tokens() {
    let mut server = common::server().await;
    let verify = server
        .mock("POST", "/auth/verify-otp")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("email".into(), "new@example.com".into()),
            Matcher::UrlEncoded("otp".into(), "123456".into()),
            Matcher::UrlEncoded("type".into(), "EMAIL_VERIFICATION".into()),
        ]))
        .with_status(200)
        .with_body(common::token_body("A1", "R1"))
        .create_async()
        .await;

    let client = common::client(&server);
    client
        .http()
        .verify_otp("new@example.com", "123456", OtpKind::EmailVerification)
        .await
        .unwrap();

    verify.assert_async().await;
    assert_eq!(client.auth().access_token().await.as_deref(), Some("A1"));
}

#[tokio::test]
async fn test_password_recovery_endpoints_accept_empty_bodies() {
    let mut server = common::server().await;
    let forgot = server
        .mock("POST", "/auth/forgot-password")
        .match_query(Matcher::UrlEncoded("email".into(), "a@b.c".into()))
        .with_status(200)
        .create_async()
        .await;
    let reset = server
        .mock("POST", "/auth/reset-password")
        .match_body(Matcher::Json(
            serde_json::json!({"email": "a@b.c", "otp": "654321", "newPassword": "n3w"}),
        ))
        .with_status(200)
        .create_async()
        .await;

    let client = common::client(&server);
    client.http().forgot_password("a@b.c").await.unwrap();
    client
        .http()
        .reset_password("a@b.c", "654321", "n3w")
        .await
        .unwrap();

    forgot.assert_async().await;
    reset.assert_async().await;
}

#[tokio::test]
async fn test_no_authorization_header_after_logout() {
    let mut server = common::server().await;
    let jobs = server
        .mock("GET", "/jobs/1")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"id":"1","title":"Rust Engineer"}"#)
        .create_async()
        .await;

    let client = common::signed_in_client(&server, "A1", "R1");
    let mut events = client.auth().subscribe();
    client.http().logout().await.unwrap();
    client.http().logout().await.unwrap();

    let job = client.get_job("1").await.unwrap();

    jobs.assert_async().await;
    assert_eq!(job.title, "Rust Engineer");
    assert!(client.auth().access_token().await.is_none());
    assert!(client.auth().refresh_token().await.is_none());
    assert!(client.auth().user().await.is_none());
    assert_eq!(common::drain(&mut events), vec![SessionEvent::Destroyed]);
}

#[tokio::test]
async fn test_logout_remote_clears_session_even_when_server_fails() {
    let mut server = common::server().await;
    let logout = server
        .mock("POST", "/auth/logout")
        .match_header("authorization", "Bearer A1")
        .with_status(500)
        .create_async()
        .await;

    let client = common::signed_in_client(&server, "A1", "R1");
    client.http().logout_remote().await.unwrap();

    logout.assert_async().await;
    assert!(!client.auth().is_authenticated().await);
}

#[tokio::test]
async fn test_login_with_unrepresentable_lifetime_has_no_expiry() {
    let mut server = common::server().await;
    let _login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(r#"{"accessToken":"A1","refreshToken":"R1","expiresIn":9223372036854775807}"#)
        .create_async()
        .await;

    let client = common::client(&server);
    let response = client
        .http()
        .login(&LoginRequest::new("student@example.com", "secret"))
        .await
        .unwrap();

    assert_eq!(response.expires_in, Some(i64::MAX));
    let session = client.auth().session().await.unwrap();
    assert_eq!(session.access_token, "A1");
    assert!(session.expires_at.is_none());
    assert!(!session.is_expired(None));
}
