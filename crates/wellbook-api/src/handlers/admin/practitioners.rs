//! Admin practitioner management — listing, verification, rejection.
//!
//! The admin gate lives in the service predicates, not the router: every
//! handler passes the explicit caller identity down.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use wellbook_core::error::AppError;
use wellbook_entity::practitioner::Practitioner;

use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/practitioners
pub async fn list_practitioners(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Practitioner>>, AppError> {
    Ok(Json(state.practitioner_service.list_all(&auth).await?))
}

/// PUT /api/admin/practitioners/{id}/verify
///
/// Requires a recorded certificate reference.
pub async fn verify_practitioner(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Practitioner>, AppError> {
    Ok(Json(state.practitioner_service.verify(&auth, id).await?))
}

/// PUT /api/admin/practitioners/{id}/reject
///
/// Deletes the profile.
pub async fn reject_practitioner(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.practitioner_service.reject(&auth, id).await?;

    Ok(Json(MessageResponse {
        message: "Practitioner rejected and removed".to_string(),
    }))
}
