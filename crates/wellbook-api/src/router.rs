//! Route definitions for the Wellbook HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(booking_routes())
        .merge(practitioner_routes())
        .merge(product_routes())
        .merge(notification_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, logout, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Booking creation, queries, and lifecycle transitions
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(handlers::booking::create_booking))
        .route("/bookings", get(handlers::booking::all_bookings))
        .route("/bookings/mine", get(handlers::booking::my_bookings))
        .route(
            "/bookings/practitioner",
            get(handlers::booking::practitioner_bookings),
        )
        .route("/bookings/{id}", get(handlers::booking::get_booking))
        .route("/bookings/{id}", put(handlers::booking::update_booking))
        .route(
            "/bookings/{id}/confirm",
            put(handlers::booking::confirm_booking),
        )
        .route(
            "/bookings/{id}/cancel",
            put(handlers::booking::cancel_booking),
        )
        .route(
            "/bookings/{id}/complete",
            put(handlers::booking::complete_booking),
        )
}

/// Practitioner self-service and public browse
fn practitioner_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/practitioners",
            post(handlers::practitioner::create_practitioner),
        )
        .route(
            "/practitioners",
            get(handlers::practitioner::browse_practitioners),
        )
        .route(
            "/practitioners/me/certificate",
            put(handlers::practitioner::set_certificate),
        )
        .route(
            "/practitioners/{id}",
            get(handlers::practitioner::get_practitioner),
        )
        .route(
            "/practitioners/{id}",
            put(handlers::practitioner::update_practitioner),
        )
}

/// Product catalog
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(handlers::product::create_product))
        .route("/products", get(handlers::product::list_products))
        .route("/products/{id}", get(handlers::product::get_product))
        .route("/products/{id}", put(handlers::product::update_product))
        .route("/products/{id}", delete(handlers::product::delete_product))
}

/// Notification endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
}

/// Admin-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/practitioners",
            get(handlers::admin::practitioners::list_practitioners),
        )
        .route(
            "/admin/practitioners/{id}/verify",
            put(handlers::admin::practitioners::verify_practitioner),
        )
        .route(
            "/admin/practitioners/{id}/reject",
            put(handlers::admin::practitioners::reject_practitioner),
        )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
