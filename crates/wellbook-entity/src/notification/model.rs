//! Notification model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A booking was created against the recipient's practitioner profile.
    BookingCreated,
    /// A booking owned by the recipient was confirmed.
    BookingConfirmed,
    /// A booking targeting the recipient's profile was cancelled.
    BookingCancelled,
    /// A booking owned by the recipient was completed.
    BookingCompleted,
}

/// An in-app notification persisted for later retrieval.
///
/// Only persistence and retrieval live here; outbound delivery channels
/// are external collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification category.
    pub kind: NotificationKind,
    /// Human-readable message.
    pub message: String,
    /// The booking this notification refers to, when applicable.
    pub booking_id: Option<Uuid>,
    /// When the recipient read the notification.
    pub read_at: Option<DateTime<Utc>>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Whether the notification is still unread.
    pub fn is_unread(&self) -> bool {
        self.read_at.is_none()
    }
}
