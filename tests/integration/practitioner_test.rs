//! Integration tests for practitioner profiles and the admin
//! verification gate.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_one_profile_per_user() {
    let app = TestApp::new().await;
    app.register("solo@example.com", "password123").await;
    let token = app.access_token("solo@example.com", "password123").await;

    let first = app
        .request(
            "POST",
            "/api/practitioners",
            Some(json!({ "display_name": "Solo", "specialization": "massage" })),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(
            "POST",
            "/api/practitioners",
            Some(json!({ "display_name": "Solo Again", "specialization": "massage" })),
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_verification_requires_certificate() {
    let app = TestApp::new().await;
    app.register("nocert@example.com", "password123").await;
    let token = app.access_token("nocert@example.com", "password123").await;
    let created = app
        .request(
            "POST",
            "/api/practitioners",
            Some(json!({ "display_name": "No Cert", "specialization": "reiki" })),
            Some(&token),
        )
        .await;
    let id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    app.register("gate@example.com", "password123").await;
    app.set_role("gate@example.com", "admin").await;
    let admin = app.access_token("gate@example.com", "password123").await;

    // Without a certificate reference, verification is a 400.
    let blocked = app
        .request(
            "PUT",
            &format!("/api/admin/practitioners/{id}/verify"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);

    let cert = app
        .request(
            "PUT",
            "/api/practitioners/me/certificate",
            Some(json!({ "certificate_ref": "certs/reiki.pdf" })),
            Some(&token),
        )
        .await;
    assert_eq!(cert.status, StatusCode::OK);

    let verified = app
        .request(
            "PUT",
            &format!("/api/admin/practitioners/{id}/verify"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(verified.status, StatusCode::OK);
    assert!(verified.body.get("verified").unwrap().as_bool().unwrap());
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_verify_and_reject_are_admin_only() {
    let app = TestApp::new().await;
    app.register("plain@example.com", "password123").await;
    let token = app.access_token("plain@example.com", "password123").await;
    let created = app
        .request(
            "POST",
            "/api/practitioners",
            Some(json!({ "display_name": "Plain", "specialization": "yoga" })),
            Some(&token),
        )
        .await;
    let id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    for action in ["verify", "reject"] {
        let response = app
            .request(
                "PUT",
                &format!("/api/admin/practitioners/{id}/{action}"),
                None,
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "action {action}");
    }
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_reject_deletes_the_profile() {
    let app = TestApp::new().await;
    app.register("doomed@example.com", "password123").await;
    let token = app.access_token("doomed@example.com", "password123").await;
    let created = app
        .request(
            "POST",
            "/api/practitioners",
            Some(json!({ "display_name": "Doomed", "specialization": "reiki" })),
            Some(&token),
        )
        .await;
    let id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    app.register("decider@example.com", "password123").await;
    app.set_role("decider@example.com", "admin").await;
    let admin = app.access_token("decider@example.com", "password123").await;

    let rejected = app
        .request(
            "PUT",
            &format!("/api/admin/practitioners/{id}/reject"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(rejected.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/practitioners/{id}"), None, None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    // Rejecting twice is a 404, not a crash.
    let again = app
        .request(
            "PUT",
            &format!("/api/admin/practitioners/{id}/reject"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_public_browse_lists_only_verified() {
    let app = TestApp::new().await;
    let (verified_id, _) = app
        .verified_practitioner("visible@example.com", "password123")
        .await;

    // A second, unverified profile.
    app.register("hidden@example.com", "password123").await;
    let hidden = app.access_token("hidden@example.com", "password123").await;
    app.request(
        "POST",
        "/api/practitioners",
        Some(json!({ "display_name": "Hidden", "specialization": "yoga" })),
        Some(&hidden),
    )
    .await;

    let browse = app.request("GET", "/api/practitioners", None, None).await;
    assert_eq!(browse.status, StatusCode::OK);
    let listed = browse.body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(
        listed[0].get("id").unwrap().as_str().unwrap(),
        verified_id.to_string()
    );

    // The specialization filter is case-insensitive.
    let filtered = app
        .request("GET", "/api/practitioners?specialization=YOGA", None, None)
        .await;
    assert_eq!(filtered.body.as_array().unwrap().len(), 1);

    let none = app
        .request("GET", "/api/practitioners?specialization=pilates", None, None)
        .await;
    assert_eq!(none.body.as_array().unwrap().len(), 0);

    // Admins see everything.
    app.register("seer@example.com", "password123").await;
    app.set_role("seer@example.com", "admin").await;
    let admin = app.access_token("seer@example.com", "password123").await;
    let all = app
        .request("GET", "/api/admin/practitioners", None, Some(&admin))
        .await;
    assert_eq!(all.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_profile_update_is_owner_or_admin() {
    let app = TestApp::new().await;
    let (id, owner) = app
        .verified_practitioner("editable@example.com", "password123")
        .await;

    app.register("meddler@example.com", "password123").await;
    let meddler = app.access_token("meddler@example.com", "password123").await;
    let denied = app
        .request(
            "PUT",
            &format!("/api/practitioners/{id}"),
            Some(json!({ "bio": "not yours" })),
            Some(&meddler),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let updated = app
        .request(
            "PUT",
            &format!("/api/practitioners/{id}"),
            Some(json!({ "bio": "ten years of practice" })),
            Some(&owner),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        updated.body.get("bio").unwrap().as_str().unwrap(),
        "ten years of practice"
    );
}
