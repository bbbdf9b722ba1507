//! Integration tests for the match request lifecycle.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

struct Actors {
    mentor_token: String,
    mentor_id: i64,
    mentee_token: String,
    mentee_id: i64,
}

async fn actors(app: &TestApp) -> Actors {
    let mentor_token = app
        .signup_and_login("mentor@example.com", "Mentor", "mentor")
        .await;
    let mentor_id = app.account_id(&mentor_token).await;
    let mentee_token = app
        .signup_and_login("mentee@example.com", "Mentee", "mentee")
        .await;
    let mentee_id = app.account_id(&mentee_token).await;
    Actors {
        mentor_token,
        mentor_id,
        mentee_token,
        mentee_id,
    }
}

async fn create_request(app: &TestApp, a: &Actors, message: &str) -> i64 {
    let response = app
        .request(
            "POST",
            "/api/match-requests",
            Some(json!({
                "mentorId": a.mentor_id,
                "menteeId": a.mentee_id,
                "message": message,
            })),
            Some(&a.mentee_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "create failed: {}", response.body);
    assert_eq!(response.body["status"], "pending");
    response.body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_guards() {
    let app = TestApp::new();
    let a = actors(&app).await;

    // Mentors cannot create requests.
    let as_mentor = app
        .request(
            "POST",
            "/api/match-requests",
            Some(json!({"mentorId": a.mentor_id, "menteeId": a.mentee_id, "message": "hi"})),
            Some(&a.mentor_token),
        )
        .await;
    assert_eq!(as_mentor.status, StatusCode::FORBIDDEN);

    // The menteeId must be the caller's own id.
    let foreign = app
        .request(
            "POST",
            "/api/match-requests",
            Some(json!({"mentorId": a.mentor_id, "menteeId": a.mentee_id + 99, "message": "hi"})),
            Some(&a.mentee_token),
        )
        .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    // The target must exist.
    let unknown = app
        .request(
            "POST",
            "/api/match-requests",
            Some(json!({"mentorId": 9999, "menteeId": a.mentee_id, "message": "hi"})),
            Some(&a.mentee_token),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    // The target must be a mentor.
    let not_a_mentor = app
        .request(
            "POST",
            "/api/match-requests",
            Some(json!({"mentorId": a.mentee_id, "menteeId": a.mentee_id, "message": "hi"})),
            Some(&a.mentee_token),
        )
        .await;
    assert_eq!(not_a_mentor.status, StatusCode::BAD_REQUEST);

    // Duplicates to the same mentor are permitted.
    create_request(&app, &a, "first").await;
    create_request(&app, &a, "second").await;
}

#[tokio::test]
async fn test_incoming_has_message_outgoing_does_not() {
    let app = TestApp::new();
    let a = actors(&app).await;
    create_request(&app, &a, "please mentor me").await;

    let incoming = app
        .request(
            "GET",
            "/api/match-requests/incoming",
            None,
            Some(&a.mentor_token),
        )
        .await;
    assert_eq!(incoming.status, StatusCode::OK);
    let first = &incoming.body.as_array().unwrap()[0];
    assert_eq!(first["message"], "please mentor me");
    assert_eq!(first["mentorId"].as_i64().unwrap(), a.mentor_id);

    let outgoing = app
        .request(
            "GET",
            "/api/match-requests/outgoing",
            None,
            Some(&a.mentee_token),
        )
        .await;
    assert_eq!(outgoing.status, StatusCode::OK);
    let first = &outgoing.body.as_array().unwrap()[0];
    assert!(first.get("message").is_none());
    assert_eq!(first["status"], "pending");

    // The listings are role-guarded.
    let wrong_role = app
        .request(
            "GET",
            "/api/match-requests/incoming",
            None,
            Some(&a.mentee_token),
        )
        .await;
    assert_eq!(wrong_role.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_accept_locks_the_request() {
    let app = TestApp::new();
    let a = actors(&app).await;
    let id = create_request(&app, &a, "hi").await;

    let accepted = app
        .request(
            "PUT",
            &format!("/api/match-requests/{id}/accept"),
            None,
            Some(&a.mentor_token),
        )
        .await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert_eq!(accepted.body["status"], "accepted");

    // A second decision fails.
    let again = app
        .request(
            "PUT",
            &format!("/api/match-requests/{id}/accept"),
            None,
            Some(&a.mentor_token),
        )
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.body["error"], "INVALID_TRANSITION");

    let reject = app
        .request(
            "PUT",
            &format!("/api/match-requests/{id}/reject"),
            None,
            Some(&a.mentor_token),
        )
        .await;
    assert_eq!(reject.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_decisions_are_owner_only() {
    let app = TestApp::new();
    let a = actors(&app).await;
    let id = create_request(&app, &a, "hi").await;

    let other_token = app
        .signup_and_login("other@example.com", "Other", "mentor")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/match-requests/{id}/accept"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let unknown = app
        .request(
            "PUT",
            "/api/match-requests/9999/accept",
            None,
            Some(&a.mentor_token),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancel_semantics() {
    let app = TestApp::new();
    let a = actors(&app).await;
    let id = create_request(&app, &a, "hi").await;

    // Mentors cannot cancel.
    let as_mentor = app
        .request(
            "DELETE",
            &format!("/api/match-requests/{id}"),
            None,
            Some(&a.mentor_token),
        )
        .await;
    assert_eq!(as_mentor.status, StatusCode::FORBIDDEN);

    // Cancelling pending works; repeating it is idempotent.
    let cancelled = app
        .request(
            "DELETE",
            &format!("/api/match-requests/{id}"),
            None,
            Some(&a.mentee_token),
        )
        .await;
    assert_eq!(cancelled.status, StatusCode::OK);
    assert_eq!(cancelled.body["status"], "cancelled");

    let again = app
        .request(
            "DELETE",
            &format!("/api/match-requests/{id}"),
            None,
            Some(&a.mentee_token),
        )
        .await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.body["status"], "cancelled");

    // Rejected requests may still be cancelled.
    let second = create_request(&app, &a, "again").await;
    app.request(
        "PUT",
        &format!("/api/match-requests/{second}/reject"),
        None,
        Some(&a.mentor_token),
    )
    .await;
    let cancel_rejected = app
        .request(
            "DELETE",
            &format!("/api/match-requests/{second}"),
            None,
            Some(&a.mentee_token),
        )
        .await;
    assert_eq!(cancel_rejected.status, StatusCode::OK);
    assert_eq!(cancel_rejected.body["status"], "cancelled");
}

/// The end-to-end scenario: signup, login, request, accept, then a cancel
/// attempt on the accepted match fails with an invalid transition.
#[tokio::test]
async fn test_end_to_end_accept_then_cancel_fails() {
    let app = TestApp::new();
    let a = actors(&app).await;
    let id = create_request(&app, &a, "please mentor me").await;

    let accepted = app
        .request(
            "PUT",
            &format!("/api/match-requests/{id}/accept"),
            None,
            Some(&a.mentor_token),
        )
        .await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert_eq!(accepted.body["status"], "accepted");

    let cancel = app
        .request(
            "DELETE",
            &format!("/api/match-requests/{id}"),
            None,
            Some(&a.mentee_token),
        )
        .await;
    assert_eq!(cancel.status, StatusCode::BAD_REQUEST);
    assert_eq!(cancel.body["error"], "INVALID_TRANSITION");
}

#[tokio::test]
async fn test_accepting_one_request_leaves_others_pending() {
    let app = TestApp::new();
    let a = actors(&app).await;
    let first = create_request(&app, &a, "first").await;

    let second_mentor_token = app
        .signup_and_login("mentor2@example.com", "Mentor Two", "mentor")
        .await;
    let second_mentor_id = app.account_id(&second_mentor_token).await;

    let second = app
        .request(
            "POST",
            "/api/match-requests",
            Some(json!({
                "mentorId": second_mentor_id,
                "menteeId": a.mentee_id,
                "message": "second",
            })),
            Some(&a.mentee_token),
        )
        .await;
    let second_id = second.body["id"].as_i64().unwrap();

    app.request(
        "PUT",
        &format!("/api/match-requests/{first}/accept"),
        None,
        Some(&a.mentor_token),
    )
    .await;

    // The competing request is untouched, and the other mentor may accept it.
    let outgoing = app
        .request(
            "GET",
            "/api/match-requests/outgoing",
            None,
            Some(&a.mentee_token),
        )
        .await;
    let competing = outgoing
        .body
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"].as_i64() == Some(second_id))
        .unwrap()
        .clone();
    assert_eq!(competing["status"], "pending");

    let also_accepted = app
        .request(
            "PUT",
            &format!("/api/match-requests/{second_id}/accept"),
            None,
            Some(&second_mentor_token),
        )
        .await;
    assert_eq!(also_accepted.status, StatusCode::OK);
}
