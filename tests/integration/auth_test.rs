//! Integration tests for the authentication flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_register_and_login() {
    let app = TestApp::new().await;
    app.register("booker@example.com", "password123").await;

    let body = app.login("booker@example.com", "password123").await;
    assert!(body.get("access_token").is_some());
    assert!(body.get("refresh_token").is_some());
    assert_eq!(body.get("role").unwrap().as_str().unwrap(), "user");
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_email_is_normalized_at_registration() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "  Mixed@Case.COM ",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body.get("email").unwrap().as_str().unwrap(),
        "mixed@case.com"
    );

    // Logging in with the mixed-case form resolves to the same account.
    let body = app.login("Mixed@Case.com", "password123").await;
    assert!(body.get("access_token").is_some());
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_duplicate_registration_conflicts() {
    let app = TestApp::new().await;
    app.register("dup@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "dup@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_login_failures_are_uniform_and_side_effect_free() {
    let app = TestApp::new().await;
    app.register("careful@example.com", "password123").await;

    // Wrong password and unknown email produce the same error shape.
    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "careful@example.com",
                "password": "not-the-password",
            })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);

    // Three failures in a row leave no lockout: the correct password
    // still works immediately.
    for _ in 0..2 {
        let again = app
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": "careful@example.com",
                    "password": "not-the-password",
                })),
                None,
            )
            .await;
        assert_eq!(again.status, StatusCode::UNAUTHORIZED);
    }

    let body = app.login("careful@example.com", "password123").await;
    assert!(body.get("access_token").is_some());
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_me_requires_valid_token() {
    let app = TestApp::new().await;
    app.register("me@example.com", "password123").await;
    let token = app.access_token("me@example.com", "password123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("email").unwrap().as_str().unwrap(),
        "me@example.com"
    );

    let unauthenticated = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(unauthenticated.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/api/auth/me", None, Some("not-a-token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_refresh_rotates_the_token() {
    let app = TestApp::new().await;
    app.register("rotate@example.com", "password123").await;
    let login = app.login("rotate@example.com", "password123").await;
    let first_refresh = login.get("refresh_token").unwrap().as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": first_refresh })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("access_token").is_some());

    let second_refresh = response
        .body
        .get("refresh_token")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();
    assert_ne!(first_refresh, second_refresh);

    // The consumed token is dead; the replacement works.
    let replay = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": first_refresh })),
            None,
        )
        .await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);

    let fresh = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": second_refresh })),
            None,
        )
        .await;
    assert_eq!(fresh.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_logout_revokes_and_is_idempotent() {
    let app = TestApp::new().await;
    app.register("leaver@example.com", "password123").await;
    let login = app.login("leaver@example.com", "password123").await;
    let refresh_token = login.get("refresh_token").unwrap().as_str().unwrap();

    let logout = app
        .request(
            "POST",
            "/api/auth/logout",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    // The revoked token can no longer mint access tokens.
    let refresh = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(refresh.status, StatusCode::UNAUTHORIZED);

    // Logging out again — or with a token that never existed — still
    // acknowledges.
    let again = app
        .request(
            "POST",
            "/api/auth/logout",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(again.status, StatusCode::OK);

    let unknown = app
        .request(
            "POST",
            "/api/auth/logout",
            Some(serde_json::json!({ "refresh_token": "never-issued" })),
            None,
        )
        .await;
    assert_eq!(unknown.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_refresh_requires_a_token_value() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": "" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
