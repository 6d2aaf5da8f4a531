//! Booking repository implementation.
//!
//! Status transitions and detail updates are single conditional UPDATEs
//! guarded on the current status, so concurrent mutations of the same
//! booking cannot both succeed.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use wellbook_core::error::{AppError, ErrorKind};
use wellbook_core::result::AppResult;
use wellbook_entity::booking::{Booking, BookingStatus, CreateBooking};

/// Repository for booking persistence.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a booking by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find booking by id", e)
            })
    }

    /// List bookings owned by a user.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY slot ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user bookings", e))
    }

    /// List bookings targeting a practitioner profile.
    pub async fn find_by_practitioner(&self, practitioner_id: Uuid) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE practitioner_id = $1 ORDER BY slot ASC",
        )
        .bind(practitioner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list practitioner bookings", e)
        })
    }

    /// List every booking.
    pub async fn find_all(&self) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))
    }

    /// Create a new booking. The status column defaults to `created` in
    /// the schema; no caller-supplied status ever reaches this statement.
    pub async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (user_id, practitioner_id, slot, notes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.practitioner_id)
        .bind(data.slot)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }

    /// Atomically move a booking from `expected` to `next`.
    ///
    /// Returns the updated row, or `None` when the booking no longer holds
    /// `expected` — the concurrent-transition case the caller turns into
    /// an invalid-transition error against the freshly observed state.
    pub async fn transition(
        &self,
        id: Uuid,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $3, updated_at = NOW() \
             WHERE id = $1 AND status = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(expected)
        .bind(next)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to transition booking", e))
    }

    /// Update slot and notes while the booking is still in `expected`.
    ///
    /// Guarding on the observed status keeps the update atomic with the
    /// terminal-state check performed by the service.
    pub async fn update_details(
        &self,
        id: Uuid,
        expected: BookingStatus,
        slot: Option<DateTime<Utc>>,
        notes: Option<String>,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET slot = COALESCE($3, slot), \
                                 notes = COALESCE($4, notes), \
                                 updated_at = NOW() \
             WHERE id = $1 AND status = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(expected)
        .bind(slot)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update booking", e))
    }
}
