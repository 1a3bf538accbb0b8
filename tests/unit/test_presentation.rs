use careermate_client::prelude::*;

#[test]
fn test_company_page_deserializes() {
    let page: Page<Company> = serde_json::from_str(
        r#"{"content":[{"id":"c-1","name":"FPT Software","industry":"IT"}],
            "totalElements":1,"totalPages":1,"number":0,"size":10}"#,
    )
    .unwrap();
    assert_eq!(page.content[0].name, "FPT Software");
    assert!(!page.has_next());
}

#[test]
fn test_subscription_active_states() {
    let sub: Subscription =
        serde_json::from_str(r#"{"id":"s-1","status":"APPROVED","startDate":"2025-01-01T00:00:00"}"#)
            .unwrap();
    assert!(sub.is_active());

    let pending: Subscription = serde_json::from_str(r#"{"id":"s-2","status":"PENDING"}"#).unwrap();
    assert!(!pending.is_active());
}

#[test]
fn test_enrollment_completion() {
    let enrollment: Enrollment = serde_json::from_str(
        r#"{"id":"e-1","progressPercentage":100.0,"completedAt":"2025-05-02T08:00:00"}"#,
    )
    .unwrap();
    assert!(enrollment.is_completed());
}

#[test]
fn test_notification_read_state() {
    let unread: Notification =
        serde_json::from_str(r#"{"id":"n-1","type":"APPLICATION","title":"New applicant"}"#)
            .unwrap();
    assert!(unread.is_unread());

    let read: Notification =
        serde_json::from_str(r#"{"id":"n-2","title":"Done","status":"READ"}"#).unwrap();
    assert!(!read.is_unread());
}

#[test]
fn test_reaction_kind_wire_name() {
    assert_eq!(ReactionKind::Like.to_string(), "LIKE");
    assert_eq!(
        serde_json::to_string(&ReactionKind::Like).unwrap(),
        r#""LIKE""#
    );
}

#[test]
fn test_rating_request_bounds() {
    assert!(RatingRequest::new(1).is_valid());
    assert!(RatingRequest::new(5).is_valid());
    assert!(!RatingRequest::new(0).is_valid());
    assert!(!RatingRequest::new(6).is_valid());
}

#[test]
fn test_user_status_wire_names() {
    assert_eq!(UserStatus::Active.as_str(), "ACTIVE");
}
