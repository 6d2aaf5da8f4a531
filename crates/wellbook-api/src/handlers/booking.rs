//! Booking handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use wellbook_core::error::AppError;
use wellbook_entity::booking::Booking;

use crate::dto::request::{CreateBookingRequest, UpdateBookingRequest};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = state
        .booking_service
        .create(&auth, req.practitioner_id, req.slot, req.notes)
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings/mine
pub async fn my_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(state.booking_service.list_mine(&auth).await?))
}

/// GET /api/bookings/practitioner
pub async fn practitioner_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(
        state.booking_service.list_for_practitioner(&auth).await?,
    ))
}

/// GET /api/bookings — admin only.
pub async fn all_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(state.booking_service.list_all(&auth).await?))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(state.booking_service.get(&auth, id).await?))
}

/// PUT /api/bookings/{id}
pub async fn update_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBookingRequest>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(
        state
            .booking_service
            .update_details(&auth, id, req.slot, req.notes)
            .await?,
    ))
}

/// PUT /api/bookings/{id}/confirm
pub async fn confirm_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(state.booking_service.confirm(&auth, id).await?))
}

/// PUT /api/bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(state.booking_service.cancel(&auth, id).await?))
}

/// PUT /api/bookings/{id}/complete
pub async fn complete_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(state.booking_service.complete(&auth, id).await?))
}
