//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::BookingStatus;

/// A booked session between a user and a practitioner.
///
/// `user_id` is the owning identity, set from the authenticated caller at
/// creation and immutable afterwards. The slot is opaque — the platform
/// does not detect slot conflicts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The user who made the booking (owner).
    pub user_id: Uuid,
    /// The practitioner profile the booking targets.
    pub practitioner_id: Uuid,
    /// Requested appointment time.
    pub slot: DateTime<Utc>,
    /// Current lifecycle state.
    pub status: BookingStatus,
    /// Free-text notes from the booking owner.
    pub notes: Option<String>,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new booking.
///
/// There is deliberately no status field: every booking starts in
/// `Created` no matter what the client sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    /// The owning user.
    pub user_id: Uuid,
    /// The target practitioner profile.
    pub practitioner_id: Uuid,
    /// Requested appointment time.
    pub slot: DateTime<Utc>,
    /// Free-text notes.
    pub notes: Option<String>,
}
