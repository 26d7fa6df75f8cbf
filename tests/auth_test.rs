mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{error_fields, response_json, TestApp};

const SIGNUP: &str = "/api/v1/auth/signup";
const LOGIN: &str = "/api/v1/auth/login";

#[tokio::test]
async fn signup_issues_a_working_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            SIGNUP,
            None,
            Some(json!({
                "username": "mira",
                "email": "Mira@Example.com",
                "password": "s3cret-password",
                "password2": "s3cret-password",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["username"], "mira");
    // Email is normalized and the hash never leaves the server.
    assert_eq!(body["user"]["email"], "mira@example.com");
    assert!(body["user"].get("password_hash").is_none());

    let token = body["token"].as_str().expect("token").to_string();
    let response = app
        .request(Method::GET, "/api/v1/profile", Some(&token), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let profile = response_json(response).await;
    assert_eq!(profile["username"], "mira");
}

#[tokio::test]
async fn duplicate_identity_is_a_field_conflict() {
    let app = TestApp::new().await;
    app.signup("mira").await;

    let response = app
        .request(
            Method::POST,
            SIGNUP,
            None,
            Some(json!({
                "username": "mira",
                "email": "other@example.com",
                "password": "s3cret-password",
                "password2": "s3cret-password",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(error_fields(&body), vec!["username".to_string()]);

    let response = app
        .request(
            Method::POST,
            SIGNUP,
            None,
            Some(json!({
                "username": "mira2",
                "email": "mira@example.com",
                "password": "s3cret-password",
                "password2": "s3cret-password",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(error_fields(&body), vec!["email".to_string()]);
}

#[tokio::test]
async fn password_mismatch_is_reported_on_the_confirmation_field() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            SIGNUP,
            None,
            Some(json!({
                "username": "mira",
                "email": "mira@example.com",
                "password": "s3cret-password",
                "password2": "different",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(error_fields(&body), vec!["password2".to_string()]);
}

#[tokio::test]
async fn login_accepts_username_or_email() {
    let app = TestApp::new().await;
    app.signup("mira").await;

    for identifier in ["mira", "mira@example.com", "MIRA@example.com"] {
        let response = app
            .request(
                Method::POST,
                LOGIN,
                None,
                Some(json!({
                    "username": identifier,
                    "password": "s3cret-password",
                })),
            )
            .await;
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "login as {identifier} should succeed"
        );
    }

    let response = app
        .request(
            Method::POST,
            LOGIN,
            None,
            Some(json!({"username": "mira", "password": "wrong"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn remember_me_extends_the_token_lifetime() {
    let app = TestApp::new().await;
    app.signup("mira").await;

    let response = app
        .request(
            Method::POST,
            LOGIN,
            None,
            Some(json!({"username": "mira", "password": "s3cret-password"})),
        )
        .await;
    let short = response_json(response).await["expires_in"]
        .as_u64()
        .expect("expires_in");

    let response = app
        .request(
            Method::POST,
            LOGIN,
            None,
            Some(json!({
                "username": "mira",
                "password": "s3cret-password",
                "remember_me": true,
            })),
        )
        .await;
    let long = response_json(response).await["expires_in"]
        .as_u64()
        .expect("expires_in");

    assert!(long > short, "remember_me should extend {short} to {long}");
}

#[tokio::test]
async fn profile_save_updates_only_the_acting_user() {
    let app = TestApp::new().await;
    let mira = app.signup("mira").await;
    let asha = app.signup("asha").await;

    let response = app
        .request(
            Method::PUT,
            "/api/v1/profile",
            Some(&mira),
            Some(json!({
                "first_name": "Mira",
                "last_name": "Shah",
                "email": "mira@example.com",
                "phone": "9876543210",
                "designation": "Merchandiser",
                "department": "Sourcing",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let profile = response_json(response).await;
    assert_eq!(profile["first_name"], "Mira");
    assert_eq!(profile["designation"], "Merchandiser");

    let response = app
        .request(Method::GET, "/api/v1/profile", Some(&asha), None)
        .await;
    let other = response_json(response).await;
    assert_eq!(other["first_name"], "");

    // Malformed phone is a field error.
    let response = app
        .request(
            Method::PUT,
            "/api/v1/profile",
            Some(&mira),
            Some(json!({"email": "mira@example.com", "phone": "12ab"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(error_fields(&body), vec!["phone".to_string()]);
}

#[tokio::test]
async fn user_directory_searches_and_counts() {
    let app = TestApp::new().await;
    let token = app.signup("mira").await;
    app.signup("asha").await;
    app.signup("ravi").await;

    let response = app
        .request(Method::GET, "/api/v1/users", Some(&token), None)
        .await;
    let users = response_json(response).await;
    assert_eq!(users.as_array().expect("user list").len(), 3);

    let response = app
        .request(Method::GET, "/api/v1/users?q=asha", Some(&token), None)
        .await;
    let users = response_json(response).await;
    let users = users.as_array().expect("user list");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "asha");

    let response = app
        .request(Method::GET, "/api/v1/users/stats", Some(&token), None)
        .await;
    let stats = response_json(response).await;
    assert_eq!(stats["total_users"], 3);
    assert_eq!(stats["new_today"], 3);
    assert_eq!(stats["active_24h"], 3);
}
