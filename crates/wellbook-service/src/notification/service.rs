//! Notification persistence and retrieval.

use std::sync::Arc;

use uuid::Uuid;

use wellbook_core::error::AppError;
use wellbook_database::repositories::notification::NotificationRepository;
use wellbook_entity::notification::{Notification, NotificationKind};

use crate::context::RequestContext;

/// Manages persisted in-app notifications.
///
/// Only persistence and retrieval live here. Pushing notifications over an
/// outbound channel is an external collaborator's concern.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Persists a notification for a recipient.
    pub async fn push(
        &self,
        recipient: Uuid,
        kind: NotificationKind,
        message: &str,
        booking_id: Option<Uuid>,
    ) -> Result<Notification, AppError> {
        self.notif_repo
            .create(recipient, kind, message, booking_id)
            .await
    }

    /// Lists the caller's notifications, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Notification>, AppError> {
        self.notif_repo.find_by_user(ctx.user_id).await
    }

    /// Counts the caller's unread notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<i64, AppError> {
        self.notif_repo.count_unread(ctx.user_id).await
    }

    /// Marks one of the caller's notifications as read.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        notification_id: Uuid,
    ) -> Result<Notification, AppError> {
        self.notif_repo.mark_read(notification_id, ctx.user_id).await
    }
}
