//! Integration tests for the booking lifecycle and its authorization
//! matrix.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

const SLOT: &str = "2030-06-01T10:00:00Z";

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_booking_against_unverified_practitioner_is_rejected() {
    let app = TestApp::new().await;

    // Practitioner with a profile but no verification.
    app.register("newbie@example.com", "password123").await;
    app.set_role("newbie@example.com", "practitioner").await;
    let practitioner_token = app.access_token("newbie@example.com", "password123").await;
    let created = app
        .request(
            "POST",
            "/api/practitioners",
            Some(json!({
                "display_name": "Unverified",
                "specialization": "pilates",
            })),
            Some(&practitioner_token),
        )
        .await;
    let practitioner_id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    app.register("hopeful@example.com", "password123").await;
    let token = app.access_token("hopeful@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(json!({ "practitioner_id": practitioner_id, "slot": SLOT })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    // Nothing was persisted.
    let mine = app
        .request("GET", "/api/bookings/mine", None, Some(&token))
        .await;
    assert_eq!(mine.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_booking_against_missing_practitioner_is_not_found() {
    let app = TestApp::new().await;
    app.register("lost@example.com", "password123").await;
    let token = app.access_token("lost@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(json!({
                "practitioner_id": "00000000-0000-0000-0000-000000000000",
                "slot": SLOT,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_create_forces_created_status_and_server_side_owner() {
    let app = TestApp::new().await;
    let (practitioner_id, _) = app
        .verified_practitioner("yogi@example.com", "password123")
        .await;

    let owner_id = app.register("owner@example.com", "password123").await;
    let token = app.access_token("owner@example.com", "password123").await;

    // A forged status and owner in the payload are ignored.
    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(json!({
                "practitioner_id": practitioner_id,
                "slot": SLOT,
                "status": "completed",
                "user_id": "00000000-0000-0000-0000-000000000000",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body.get("status").unwrap().as_str().unwrap(), "created");
    assert_eq!(
        response.body.get("user_id").unwrap().as_str().unwrap(),
        owner_id.to_string()
    );
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_cancel_gate_owner_stranger_admin() {
    let app = TestApp::new().await;
    let (practitioner_id, _) = app
        .verified_practitioner("healer@example.com", "password123")
        .await;

    app.register("alice@example.com", "password123").await;
    let alice = app.access_token("alice@example.com", "password123").await;

    let booking = app
        .request(
            "POST",
            "/api/bookings",
            Some(json!({ "practitioner_id": practitioner_id, "slot": SLOT })),
            Some(&alice),
        )
        .await;
    let booking_id = booking.body.get("id").unwrap().as_str().unwrap().to_string();

    // An unrelated user cannot cancel.
    app.register("bob@example.com", "password123").await;
    let bob = app.access_token("bob@example.com", "password123").await;
    let forbidden = app
        .request(
            "PUT",
            &format!("/api/bookings/{booking_id}/cancel"),
            None,
            Some(&bob),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    // An admin can.
    app.register("root@example.com", "password123").await;
    app.set_role("root@example.com", "admin").await;
    let admin = app.access_token("root@example.com", "password123").await;
    let cancelled = app
        .request(
            "PUT",
            &format!("/api/bookings/{booking_id}/cancel"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(cancelled.status, StatusCode::OK);
    assert_eq!(
        cancelled.body.get("status").unwrap().as_str().unwrap(),
        "cancelled"
    );
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_confirm_complete_flow_and_terminal_immutability() {
    let app = TestApp::new().await;
    let (practitioner_id, practitioner) = app
        .verified_practitioner("sensei@example.com", "password123")
        .await;

    app.register("student@example.com", "password123").await;
    let student = app.access_token("student@example.com", "password123").await;

    let booking = app
        .request(
            "POST",
            "/api/bookings",
            Some(json!({ "practitioner_id": practitioner_id, "slot": SLOT })),
            Some(&student),
        )
        .await;
    let booking_id = booking.body.get("id").unwrap().as_str().unwrap().to_string();

    // Completing before confirmation is outside the table.
    let premature = app
        .request(
            "PUT",
            &format!("/api/bookings/{booking_id}/complete"),
            None,
            Some(&practitioner),
        )
        .await;
    assert_eq!(premature.status, StatusCode::CONFLICT);

    // The booking owner cannot confirm their own booking.
    let owner_confirm = app
        .request(
            "PUT",
            &format!("/api/bookings/{booking_id}/confirm"),
            None,
            Some(&student),
        )
        .await;
    assert_eq!(owner_confirm.status, StatusCode::FORBIDDEN);

    // The target practitioner confirms, then completes.
    let confirmed = app
        .request(
            "PUT",
            &format!("/api/bookings/{booking_id}/confirm"),
            None,
            Some(&practitioner),
        )
        .await;
    assert_eq!(confirmed.status, StatusCode::OK);
    assert_eq!(
        confirmed.body.get("status").unwrap().as_str().unwrap(),
        "confirmed"
    );

    let completed = app
        .request(
            "PUT",
            &format!("/api/bookings/{booking_id}/complete"),
            None,
            Some(&practitioner),
        )
        .await;
    assert_eq!(completed.status, StatusCode::OK);
    assert_eq!(
        completed.body.get("status").unwrap().as_str().unwrap(),
        "completed"
    );

    // A second complete, a cancel, and a detail update all hit the
    // terminal wall; the stored state stays completed.
    for path in ["complete", "cancel"] {
        let response = app
            .request(
                "PUT",
                &format!("/api/bookings/{booking_id}/{path}"),
                None,
                Some(&practitioner),
            )
            .await;
        assert_eq!(response.status, StatusCode::CONFLICT, "event {path}");
    }
    let update = app
        .request(
            "PUT",
            &format!("/api/bookings/{booking_id}"),
            Some(json!({ "notes": "too late" })),
            Some(&student),
        )
        .await;
    assert_eq!(update.status, StatusCode::CONFLICT);

    let current = app
        .request(
            "GET",
            &format!("/api/bookings/{booking_id}"),
            None,
            Some(&student),
        )
        .await;
    assert_eq!(
        current.body.get("status").unwrap().as_str().unwrap(),
        "completed"
    );

    // The owner was notified about both transitions.
    let unread = app
        .request("GET", "/api/notifications/unread-count", None, Some(&student))
        .await;
    assert_eq!(unread.body.get("count").unwrap().as_i64().unwrap(), 2);
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_booking_listings_are_scoped() {
    let app = TestApp::new().await;
    let (practitioner_id, practitioner) = app
        .verified_practitioner("listed@example.com", "password123")
        .await;

    app.register("first@example.com", "password123").await;
    let first = app.access_token("first@example.com", "password123").await;
    app.register("second@example.com", "password123").await;
    let second = app.access_token("second@example.com", "password123").await;

    for token in [&first, &second] {
        let created = app
            .request(
                "POST",
                "/api/bookings",
                Some(json!({ "practitioner_id": practitioner_id, "slot": SLOT })),
                Some(token),
            )
            .await;
        assert_eq!(created.status, StatusCode::CREATED);
    }

    let mine = app
        .request("GET", "/api/bookings/mine", None, Some(&first))
        .await;
    assert_eq!(mine.body.as_array().unwrap().len(), 1);

    let dashboard = app
        .request("GET", "/api/bookings/practitioner", None, Some(&practitioner))
        .await;
    assert_eq!(dashboard.body.as_array().unwrap().len(), 2);

    // The full listing is admin-only.
    let denied = app.request("GET", "/api/bookings", None, Some(&first)).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    app.register("auditor@example.com", "password123").await;
    app.set_role("auditor@example.com", "admin").await;
    let admin = app.access_token("auditor@example.com", "password123").await;
    let all = app.request("GET", "/api/bookings", None, Some(&admin)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body.as_array().unwrap().len(), 2);
}
