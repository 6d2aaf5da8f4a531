//! Booking lifecycle — creation, transitions, and their authorization
//! matrix.
//!
//! Who may drive which transition:
//!
//! | Event    | Permitted caller                       |
//! |----------|----------------------------------------|
//! | create   | any authenticated user (role USER)     |
//! | confirm  | target practitioner or admin           |
//! | cancel   | booking owner or admin                 |
//! | complete | target practitioner or admin           |
//!
//! The state table itself lives on [`BookingStatus`]; this service layers
//! the identity checks on top and applies the transition with a
//! compare-and-swap so concurrent calls cannot both succeed.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use wellbook_auth::authz::Check;
use wellbook_core::error::AppError;
use wellbook_database::repositories::booking::BookingRepository;
use wellbook_database::repositories::practitioner::PractitionerRepository;
use wellbook_entity::booking::{Booking, BookingEvent, BookingStatus, CreateBooking};
use wellbook_entity::notification::NotificationKind;
use wellbook_entity::user::UserRole;

use crate::context::RequestContext;
use crate::notification::NotificationService;

/// Implements the booking lifecycle use cases.
#[derive(Debug, Clone)]
pub struct BookingService {
    /// Booking persistence.
    booking_repo: Arc<BookingRepository>,
    /// Practitioner lookup for the verified-gate and transition checks.
    practitioner_repo: Arc<PractitionerRepository>,
    /// Counterparty notifications.
    notifications: Arc<NotificationService>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        practitioner_repo: Arc<PractitionerRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            booking_repo,
            practitioner_repo,
            notifications,
        }
    }

    /// Creates a booking against a verified practitioner.
    ///
    /// The owner is always the authenticated caller and the status is
    /// always `Created` — neither is taken from the request payload.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        practitioner_id: Uuid,
        slot: DateTime<Utc>,
        notes: Option<String>,
    ) -> Result<Booking, AppError> {
        Check::Role(UserRole::User).authorize(&ctx.actor())?;

        let practitioner = self
            .practitioner_repo
            .find_by_id(practitioner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Practitioner not found"))?;

        if !practitioner.verified {
            return Err(AppError::practitioner_not_verified(
                "Practitioner is not verified",
            ));
        }

        let booking = self
            .booking_repo
            .create(&CreateBooking {
                user_id: ctx.user_id,
                practitioner_id,
                slot,
                notes,
            })
            .await?;

        info!(
            booking_id = %booking.id,
            user_id = %ctx.user_id,
            practitioner_id = %practitioner_id,
            "Booking created"
        );

        self.notify(
            practitioner.user_id,
            NotificationKind::BookingCreated,
            &format!("New booking requested for {}", booking.slot),
            booking.id,
        )
        .await;

        Ok(booking)
    }

    /// Practitioner (or admin) accepts a booking.
    pub async fn confirm(&self, ctx: &RequestContext, id: Uuid) -> Result<Booking, AppError> {
        self.transition(ctx, id, BookingEvent::Confirm).await
    }

    /// Owner (or admin) withdraws a booking.
    pub async fn cancel(&self, ctx: &RequestContext, id: Uuid) -> Result<Booking, AppError> {
        self.transition(ctx, id, BookingEvent::Cancel).await
    }

    /// Practitioner (or admin) marks the session as held.
    pub async fn complete(&self, ctx: &RequestContext, id: Uuid) -> Result<Booking, AppError> {
        self.transition(ctx, id, BookingEvent::Complete).await
    }

    /// Lists bookings owned by the caller.
    pub async fn list_mine(&self, ctx: &RequestContext) -> Result<Vec<Booking>, AppError> {
        self.booking_repo.find_by_user(ctx.user_id).await
    }

    /// Lists bookings targeting the caller's practitioner profile.
    pub async fn list_for_practitioner(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Booking>, AppError> {
        let profile = self
            .practitioner_repo
            .find_by_user_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Practitioner profile not found"))?;

        self.booking_repo.find_by_practitioner(profile.id).await
    }

    /// Lists every booking. Admin only.
    pub async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Booking>, AppError> {
        Check::Role(UserRole::Admin).authorize(&ctx.actor())?;
        self.booking_repo.find_all().await
    }

    /// Fetches a single booking visible to its owner, the target
    /// practitioner, or an admin.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Booking, AppError> {
        let booking = self.fetch(id).await?;

        let mut branches = vec![
            Check::Owner(booking.user_id),
            Check::Role(UserRole::Admin),
        ];
        if let Some(practitioner) = self
            .practitioner_repo
            .find_by_id(booking.practitioner_id)
            .await?
        {
            branches.push(Check::Owner(practitioner.user_id));
        }
        Check::AnyOf(branches).authorize(&ctx.actor())?;

        Ok(booking)
    }

    /// Updates slot and notes. Owner or admin, non-terminal states only.
    pub async fn update_details(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        slot: Option<DateTime<Utc>>,
        notes: Option<String>,
    ) -> Result<Booking, AppError> {
        let booking = self.fetch(id).await?;

        Check::owner_or_admin(booking.user_id).authorize(&ctx.actor())?;

        if booking.status.is_terminal() {
            return Err(AppError::invalid_transition(format!(
                "Cannot update a booking in terminal state '{}'",
                booking.status
            )));
        }

        match self
            .booking_repo
            .update_details(id, booking.status, slot, notes)
            .await?
        {
            Some(updated) => Ok(updated),
            // The status moved underneath us; report against what is
            // stored now.
            None => Err(self.stale_transition_error(id, "update").await?),
        }
    }

    /// Shared transition path: load, authorize, apply the state table,
    /// compare-and-swap.
    async fn transition(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        event: BookingEvent,
    ) -> Result<Booking, AppError> {
        let booking = self.fetch(id).await?;

        self.gate_for(&booking, event).await?.authorize(&ctx.actor())?;

        let next = booking.status.apply(event).ok_or_else(|| {
            AppError::invalid_transition(format!(
                "Cannot {event} a booking in state '{}'",
                booking.status
            ))
        })?;

        let updated = match self.booking_repo.transition(id, booking.status, next).await? {
            Some(updated) => updated,
            // Lost a race: the stored status is no longer what we read.
            None => return Err(self.stale_transition_error(id, &event.to_string()).await?),
        };

        info!(
            booking_id = %id,
            from = %booking.status,
            to = %next,
            actor = %ctx.user_id,
            "Booking transitioned"
        );

        self.notify_transition(&booking, &updated, next).await;

        Ok(updated)
    }

    /// Builds the authorization gate for an event against a loaded booking.
    async fn gate_for(&self, booking: &Booking, event: BookingEvent) -> Result<Check, AppError> {
        let gate = match event {
            BookingEvent::Cancel => Check::owner_or_admin(booking.user_id),
            BookingEvent::Confirm | BookingEvent::Complete => {
                // The practitioner profile may have been rejected since the
                // booking was made; then only an admin can still act.
                match self
                    .practitioner_repo
                    .find_by_id(booking.practitioner_id)
                    .await?
                {
                    Some(practitioner) => Check::owner_or_admin(practitioner.user_id),
                    None => Check::Role(UserRole::Admin),
                }
            }
        };
        Ok(gate)
    }

    async fn fetch(&self, id: Uuid) -> Result<Booking, AppError> {
        self.booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))
    }

    /// Re-reads the booking after a failed compare-and-swap and produces
    /// the error matching the freshly observed state.
    async fn stale_transition_error(
        &self,
        id: Uuid,
        attempted: &str,
    ) -> Result<AppError, AppError> {
        let current = self.fetch(id).await?;
        Ok(AppError::invalid_transition(format!(
            "Cannot {attempted} a booking in state '{}'",
            current.status
        )))
    }

    /// Notifies the counterparty of a transition. Failures are logged, not
    /// propagated — the transition has already committed.
    async fn notify_transition(&self, booking: &Booking, updated: &Booking, next: BookingStatus) {
        match next {
            BookingStatus::Confirmed => {
                self.notify(
                    booking.user_id,
                    NotificationKind::BookingConfirmed,
                    &format!("Your booking for {} was confirmed", updated.slot),
                    booking.id,
                )
                .await;
            }
            BookingStatus::Completed => {
                self.notify(
                    booking.user_id,
                    NotificationKind::BookingCompleted,
                    &format!("Your booking for {} was completed", updated.slot),
                    booking.id,
                )
                .await;
            }
            BookingStatus::Cancelled => {
                if let Ok(Some(practitioner)) = self
                    .practitioner_repo
                    .find_by_id(booking.practitioner_id)
                    .await
                {
                    self.notify(
                        practitioner.user_id,
                        NotificationKind::BookingCancelled,
                        &format!("The booking for {} was cancelled", updated.slot),
                        booking.id,
                    )
                    .await;
                }
            }
            BookingStatus::Created => {}
        }
    }

    async fn notify(
        &self,
        recipient: Uuid,
        kind: NotificationKind,
        message: &str,
        booking_id: Uuid,
    ) {
        if let Err(e) = self
            .notifications
            .push(recipient, kind, message, Some(booking_id))
            .await
        {
            warn!(booking_id = %booking_id, error = %e, "Failed to persist notification");
        }
    }
}
