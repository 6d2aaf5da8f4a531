//! Integration tests for product ownership — the same gate as bookings,
//! without a state machine.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn create_product(app: &TestApp, token: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({
                "name": "Yoga mat",
                "price": 29.5,
                "stock": 10,
                "category": "equipment",
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.body.get("id").unwrap().as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_only_practitioners_and_admins_create_products() {
    let app = TestApp::new().await;

    app.register("shopper@example.com", "password123").await;
    let shopper = app.access_token("shopper@example.com", "password123").await;
    let denied = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "name": "Nope", "price": 1.0, "stock": 1 })),
            Some(&shopper),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let (_, seller) = app
        .verified_practitioner("seller@example.com", "password123")
        .await;
    create_product(&app, &seller).await;
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL instance"]
async fn test_owner_is_server_side_and_preserved_on_update() {
    let app = TestApp::new().await;
    let (_, seller) = app
        .verified_practitioner("maker@example.com", "password123")
        .await;
    let product_id = create_product(&app, &seller).await;

    let me = app.request("GET", "/api/auth/me", None, Some(&seller)).await;
    let seller_id = me.body.get("id").unwrap().as_str().unwrap().to_string();

    let fetched = app
        .request("GET", &format!("/api/products/{product_id}"), None, None)
        .await;
    assert_eq!(
        fetched.body.get("owner_id").unwrap().as_str().unwrap(),
        seller_id
    );

    // An unrelated practitioner cannot mutate it.
    let (_, rival) = app
        .verified_practitioner("rival@example.com", "password123")
        .await;
    let denied_update = app
        .request(
            "PUT",
            &format!("/api/products/{product_id}"),
            Some(json!({ "price": 0.01 })),
            Some(&rival),
        )
        .await;
    assert_eq!(denied_update.status, StatusCode::FORBIDDEN);
    let denied_delete = app
        .request(
            "DELETE",
            &format!("/api/products/{product_id}"),
            None,
            Some(&rival),
        )
        .await;
    assert_eq!(denied_delete.status, StatusCode::FORBIDDEN);

    // An admin can; the owner reference survives the update.
    app.register("curator@example.com", "password123").await;
    app.set_role("curator@example.com", "admin").await;
    let admin = app.access_token("curator@example.com", "password123").await;
    let updated = app
        .request(
            "PUT",
            &format!("/api/products/{product_id}"),
            Some(json!({ "price": 25.0 })),
            Some(&admin),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        updated.body.get("owner_id").unwrap().as_str().unwrap(),
        seller_id
    );

    // Owner delete works.
    let deleted = app
        .request(
            "DELETE",
            &format!("/api/products/{product_id}"),
            None,
            Some(&seller),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/products/{product_id}"), None, None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}
