//! Auth handlers — register, login, refresh, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use wellbook_core::error::AppError;

use crate::dto::request::{LoginRequest, LogoutRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{
    LoginResponse, MessageResponse, RefreshResponse, RegisterResponse, UserResponse,
};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .register(&req.email, req.name.as_deref().unwrap_or(""), &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: user.id,
            email: user.email,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state.session_manager.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        access_token: result.access_token,
        access_expires_at: result.access_expires_at,
        refresh_token: result.refresh_token,
        refresh_expires_at: result.refresh_expires_at,
        role: result.user.role.to_string(),
        user_id: result.user.id,
    }))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AppError> {
    let token = require_token(req.refresh_token.as_deref())?;

    let result = state.session_manager.refresh(token).await?;

    Ok(Json(RefreshResponse {
        access_token: result.access_token,
        access_expires_at: result.access_expires_at,
        refresh_token: result.refresh_token,
        refresh_expires_at: result.refresh_expires_at,
    }))
}

/// POST /api/auth/logout
///
/// Idempotent: an unknown refresh token is acknowledged the same way.
pub async fn logout(
    State(state): State<AppState>,
    Json(req): Json<LogoutRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let token = require_token(req.refresh_token.as_deref())?;

    state.session_manager.logout(token).await?;

    Ok(Json(MessageResponse {
        message: "Logged out".to_string(),
    }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_profile(&auth).await?;

    Ok(Json(UserResponse {
        id: user.id,
        email: user.email,
        name: user.name,
        role: user.role.to_string(),
        authority: user.role.authority(),
        created_at: user.created_at,
    }))
}

/// A refresh token must be present and non-blank; anything else is a
/// request-shape problem, not a token problem.
fn require_token(token: Option<&str>) -> Result<&str, AppError> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::validation("Refresh token is required"))
}
