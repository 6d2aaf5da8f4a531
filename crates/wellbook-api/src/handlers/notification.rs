//! Notification handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use wellbook_core::error::AppError;
use wellbook_entity::notification::Notification;

use crate::dto::response::UnreadCountResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Notification>>, AppError> {
    Ok(Json(state.notification_service.list(&auth).await?))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UnreadCountResponse>, AppError> {
    let count = state.notification_service.unread_count(&auth).await?;
    Ok(Json(UnreadCountResponse { count }))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, AppError> {
    Ok(Json(state.notification_service.mark_read(&auth, id).await?))
}
