//! HTTP-level integration tests for mock login and profile upserts.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use investo_core::auth::{INVALID_EMAIL_MESSAGE, WEAK_PASSWORD_MESSAGE};
use serde_json::json;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn signin_upserts_local_user() {
    let app = common::build_test_app().await;
    let body = json!({
        "email": "new@example.com",
        "password": "x",
        "display_name": "Newcomer",
        "role": "investor",
    });

    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "local-user");
    assert_eq!(json["data"]["email"], "new@example.com");
    assert_eq!(json["data"]["role"], "investor");
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = common::build_test_app().await;
    let body = json!({ "email": "not-an-email", "password": "Str0ng!pass" });

    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], INVALID_EMAIL_MESSAGE);
}

#[tokio::test]
async fn weak_signup_password_is_rejected() {
    let app = common::build_test_app().await;
    let body = json!({ "mode": "signup", "email": "a@b.co", "password": "short" });

    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], WEAK_PASSWORD_MESSAGE);
}

#[tokio::test]
async fn password_strength_reports_label() {
    let app = common::build_test_app().await;
    let json = body_json(get(app, "/api/v1/auth/password-strength?password=Abcdefg1!").await).await;

    assert_eq!(json["data"]["score"], 4);
    assert_eq!(json["data"]["label"], "Strong");
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[tokio::test]
async fn profile_upsert_replaces_existing_user() {
    let app = common::build_test_app().await;
    let body = json!({
        "email": "ali@example.com",
        "display_name": "Ali A.",
        "role": "analyst",
    });

    let response = put_json(app, "/api/v1/users/u-student-1", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "u-student-1");
    assert_eq!(json["data"]["display_name"], "Ali A.");
    assert_eq!(json["data"]["role"], "analyst");
}

#[tokio::test]
async fn profile_upsert_rejects_bad_email() {
    let app = common::build_test_app().await;
    let response = put_json(app, "/api/v1/users/u-x", json!({ "email": "nope" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
