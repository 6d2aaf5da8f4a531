//! Practitioner handlers — self-service and public browse.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use wellbook_core::error::AppError;
use wellbook_entity::practitioner::{Practitioner, UpdatePractitioner};

use crate::dto::request::{
    BrowsePractitionersQuery, CertificateRequest, CreatePractitionerRequest,
    UpdatePractitionerRequest,
};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/practitioners
pub async fn create_practitioner(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePractitionerRequest>,
) -> Result<(StatusCode, Json<Practitioner>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let practitioner = state
        .practitioner_service
        .create(
            &auth,
            req.display_name,
            req.specialization,
            req.bio,
            req.experience_years.unwrap_or(0),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(practitioner)))
}

/// PUT /api/practitioners/me/certificate
pub async fn set_certificate(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CertificateRequest>,
) -> Result<Json<Practitioner>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    Ok(Json(
        state
            .practitioner_service
            .set_certificate(&auth, &req.certificate_ref)
            .await?,
    ))
}

/// GET /api/practitioners?specialization=
///
/// Public: only verified profiles are listed.
pub async fn browse_practitioners(
    State(state): State<AppState>,
    Query(query): Query<BrowsePractitionersQuery>,
) -> Result<Json<Vec<Practitioner>>, AppError> {
    Ok(Json(
        state
            .practitioner_service
            .browse(query.specialization.as_deref())
            .await?,
    ))
}

/// GET /api/practitioners/{id}
pub async fn get_practitioner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Practitioner>, AppError> {
    Ok(Json(state.practitioner_service.get(id).await?))
}

/// PUT /api/practitioners/{id} — owner or admin.
pub async fn update_practitioner(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePractitionerRequest>,
) -> Result<Json<Practitioner>, AppError> {
    let data = UpdatePractitioner {
        display_name: req.display_name,
        specialization: req.specialization,
        bio: req.bio,
        experience_years: req.experience_years,
    };

    Ok(Json(
        state.practitioner_service.update(&auth, id, data).await?,
    ))
}
