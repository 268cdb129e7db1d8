// ABOUTME: HTTP integration tests for registration, token login and current-user routes
// ABOUTME: Exercises the complete bearer-token flow over the in-memory database
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helena_ir_server::auth::AuthManager;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

async fn login(app: axum::Router, username: &str, password: &str) -> (u16, Value) {
    let response = AxumTestRequest::post("/token")
        .form(&[("username", username), ("password", password)])
        .send(app)
        .await;
    let status = response.status();
    (status, response.json())
}

// ============================================================================
// POST /users/create/
// ============================================================================

#[tokio::test]
async fn test_register_returns_created_user_without_password() {
    let (app, _) = common::create_test_app().await;

    let response = AxumTestRequest::post("/users/create/")
        .json(&json!({
            "email": "Kid@Example.com",
            "password": "long enough password",
            "full_name": "Kid Example"
        }))
        .send(app)
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert_eq!(body["email"], "kid@example.com");
    assert_eq!(body["full_name"], "Kid Example");
    assert_eq!(body["disabled"], false);
    assert!(body.get("hashed_password").is_none());
    assert!(uuid::Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let (app, resources) = common::create_test_app().await;
    common::create_test_user(&resources.database, "kid@example.com")
        .await
        .unwrap();

    let response = AxumTestRequest::post("/users/create/")
        .json(&json!({ "email": "kid@example.com", "password": "another password" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 409);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_rejects_short_password_and_bad_email() {
    let (app, _) = common::create_test_app().await;

    let response = AxumTestRequest::post("/users/create/")
        .json(&json!({ "email": "kid@example.com", "password": "short" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 422);

    let response = AxumTestRequest::post("/users/create/")
        .json(&json!({ "email": "not-an-email", "password": "long enough password" }))
        .send(app)
        .await;
    assert_eq!(response.status(), 422);
}

// ============================================================================
// POST /token
// ============================================================================

#[tokio::test]
async fn test_login_issues_bearer_token() {
    let (app, resources) = common::create_test_app().await;
    let user = common::create_test_user(&resources.database, "kid@example.com")
        .await
        .unwrap();

    let (status, body) = login(app, "kid@example.com", common::TEST_PASSWORD).await;

    assert_eq!(status, 200);
    assert_eq!(body["token_type"], "bearer");
    let claims = resources
        .auth_manager
        .validate_token(body["access_token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_identical() {
    let (app, resources) = common::create_test_app().await;
    common::create_test_user(&resources.database, "kid@example.com")
        .await
        .unwrap();

    let (status, wrong_password) = login(app.clone(), "kid@example.com", "wrong password").await;
    assert_eq!(status, 401);
    assert_eq!(wrong_password["error"]["message"], "Incorrect email or password");

    let (status, unknown_email) = login(app, "nobody@example.com", "wrong password").await;
    assert_eq!(status, 401);
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_login_disabled_user_is_rejected() {
    let (app, resources) = common::create_test_app().await;
    let user = common::create_test_user(&resources.database, "kid@example.com")
        .await
        .unwrap();
    resources
        .database
        .set_user_disabled(user.id, true)
        .await
        .unwrap();

    let (status, body) = login(app, "kid@example.com", common::TEST_PASSWORD).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "USER_DISABLED");
}

#[tokio::test]
async fn test_login_requires_form_fields() {
    let (app, _) = common::create_test_app().await;

    let response = AxumTestRequest::post("/token")
        .form(&[("username", "kid@example.com")])
        .send(app)
        .await;

    assert_eq!(response.status(), 422);
}

// ============================================================================
// GET /users/me/
// ============================================================================

#[tokio::test]
async fn test_me_returns_current_user() {
    let (app, resources) = common::create_test_app().await;
    let (user, token) = common::create_test_user_with_token(&resources, "kid@example.com")
        .await
        .unwrap();

    let response = AxumTestRequest::get("/users/me/")
        .bearer(&token)
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["email"], "kid@example.com");
}

#[tokio::test]
async fn test_me_without_token_challenges() {
    let (app, _) = common::create_test_app().await;

    let response = AxumTestRequest::get("/users/me/").send(app).await;

    assert_eq!(response.status(), 401);
    assert_eq!(response.header("www-authenticate").as_deref(), Some("Bearer"));
}

#[tokio::test]
async fn test_me_with_foreign_token_is_rejected() {
    let (app, resources) = common::create_test_app().await;
    let user = common::create_test_user(&resources.database, "kid@example.com")
        .await
        .unwrap();
    let foreign = AuthManager::new(b"another-secret", 30)
        .generate_token(&user)
        .unwrap();

    let response = AxumTestRequest::get("/users/me/")
        .bearer(&foreign)
        .send(app)
        .await;

    assert_eq!(response.status(), 401);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Could not validate credentials");
}

#[tokio::test]
async fn test_me_with_expired_token_is_rejected() {
    let (app, resources) = common::create_test_app().await;
    let user = common::create_test_user(&resources.database, "kid@example.com")
        .await
        .unwrap();
    let expired = AuthManager::new(resources.config.auth.jwt_secret.as_bytes(), -10)
        .generate_token(&user)
        .unwrap();

    let response = AxumTestRequest::get("/users/me/")
        .bearer(&expired)
        .send(app)
        .await;

    assert_eq!(response.status(), 401);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "AUTH_EXPIRED");
}

#[tokio::test]
async fn test_me_for_disabled_user_is_rejected() {
    let (app, resources) = common::create_test_app().await;
    let (user, token) = common::create_test_user_with_token(&resources, "kid@example.com")
        .await
        .unwrap();
    resources
        .database
        .set_user_disabled(user.id, true)
        .await
        .unwrap();

    let response = AxumTestRequest::get("/users/me/")
        .bearer(&token)
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Inactive user");
}
