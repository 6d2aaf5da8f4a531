//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use wellbook_auth::jwt::{JwtDecoder, JwtEncoder};
use wellbook_auth::session::SessionManager;
use wellbook_core::config::AppConfig;
use wellbook_service::booking::BookingService;
use wellbook_service::notification::NotificationService;
use wellbook_service::practitioner::PractitionerService;
use wellbook_service::product::ProductService;
use wellbook_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT access token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT access token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Login / refresh / logout orchestration.
    pub session_manager: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and profile service.
    pub user_service: Arc<UserService>,
    /// Booking lifecycle service.
    pub booking_service: Arc<BookingService>,
    /// Practitioner profile service.
    pub practitioner_service: Arc<PractitionerService>,
    /// Product catalog service.
    pub product_service: Arc<ProductService>,
    /// In-app notification service.
    pub notification_service: Arc<NotificationService>,
}
