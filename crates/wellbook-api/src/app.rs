//! Application builder — wires repositories, auth, services, and the
//! router into a runnable server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use wellbook_auth::credentials::CredentialVerifier;
use wellbook_auth::jwt::{JwtDecoder, JwtEncoder};
use wellbook_auth::password::PasswordHasher;
use wellbook_auth::refresh::RefreshTokenStore;
use wellbook_auth::session::SessionManager;
use wellbook_core::config::AppConfig;
use wellbook_core::error::AppError;
use wellbook_database::repositories::{
    BookingRepository, NotificationRepository, PractitionerRepository, ProductRepository,
    RefreshTokenRepository, UserRepository,
};
use wellbook_service::booking::BookingService;
use wellbook_service::notification::NotificationService;
use wellbook_service::practitioner::PractitionerService;
use wellbook_service::product::ProductService;
use wellbook_service::user::UserService;

use crate::router::build_router;
use crate::state::AppState;

/// Constructs the full application state from configuration and a
/// connected pool.
///
/// Fails fast when the auth configuration violates the deploy-time
/// contract (missing or short JWT secret).
pub fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    // ── Repositories ─────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let refresh_repo = Arc::new(RefreshTokenRepository::new(db_pool.clone()));
    let practitioner_repo = Arc::new(PractitionerRepository::new(db_pool.clone()));
    let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));
    let product_repo = Arc::new(ProductRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth)?);
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth)?);
    let credential_verifier = Arc::new(CredentialVerifier::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    ));
    let refresh_store = Arc::new(RefreshTokenStore::new(
        Arc::clone(&refresh_repo),
        config.auth.refresh_token_ttl_days,
    ));
    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&credential_verifier),
        Arc::clone(&jwt_encoder),
        Arc::clone(&refresh_store),
        Arc::clone(&user_repo),
    ));

    // ── Services ─────────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        config.auth.password_min_length,
    ));
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&notification_repo)));
    let booking_service = Arc::new(BookingService::new(
        Arc::clone(&booking_repo),
        Arc::clone(&practitioner_repo),
        Arc::clone(&notification_service),
    ));
    let practitioner_service = Arc::new(PractitionerService::new(Arc::clone(&practitioner_repo)));
    let product_service = Arc::new(ProductService::new(Arc::clone(&product_repo)));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        session_manager,
        user_service,
        booking_service,
        practitioner_service,
        product_service,
        notification_service,
    })
}

/// Builds the complete Axum application from prepared state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Wellbook server with the given configuration and database
/// pool, serving until a shutdown signal arrives.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = build_state(config, db_pool)?;
    let app = build_app(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Wellbook server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Wellbook server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
