//! Practitioner profile use cases: self-service, public browse, and the
//! admin verification gate.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use wellbook_auth::authz::Check;
use wellbook_core::error::AppError;
use wellbook_database::repositories::practitioner::PractitionerRepository;
use wellbook_entity::practitioner::{CreatePractitioner, Practitioner, UpdatePractitioner};
use wellbook_entity::user::UserRole;

use crate::context::RequestContext;

/// Implements practitioner profile use cases.
#[derive(Debug, Clone)]
pub struct PractitionerService {
    /// Profile persistence.
    practitioner_repo: Arc<PractitionerRepository>,
}

impl PractitionerService {
    /// Creates a new practitioner service.
    pub fn new(practitioner_repo: Arc<PractitionerRepository>) -> Self {
        Self { practitioner_repo }
    }

    /// Creates a profile for the authenticated caller. One profile per
    /// user; a second attempt fails as a duplicate.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        display_name: String,
        specialization: String,
        bio: Option<String>,
        experience_years: i32,
    ) -> Result<Practitioner, AppError> {
        if self
            .practitioner_repo
            .find_by_user_id(ctx.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::duplicate(
                "A practitioner profile already exists for this user",
            ));
        }

        let practitioner = self
            .practitioner_repo
            .create(&CreatePractitioner {
                user_id: ctx.user_id,
                display_name,
                specialization,
                bio,
                experience_years,
            })
            .await?;

        info!(
            practitioner_id = %practitioner.id,
            user_id = %ctx.user_id,
            "Practitioner profile created"
        );

        Ok(practitioner)
    }

    /// Records the caller's certificate reference. The file itself lives
    /// with an external storage collaborator; only the reference is kept.
    pub async fn set_certificate(
        &self,
        ctx: &RequestContext,
        certificate_ref: &str,
    ) -> Result<Practitioner, AppError> {
        let reference = certificate_ref.trim();
        if reference.is_empty() {
            return Err(AppError::validation("Certificate reference is required"));
        }

        self.practitioner_repo
            .set_certificate(ctx.user_id, reference)
            .await
    }

    /// Applies a partial update. Owner or admin.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdatePractitioner,
    ) -> Result<Practitioner, AppError> {
        let existing = self.fetch(id).await?;

        Check::owner_or_admin(existing.user_id).authorize(&ctx.actor())?;

        self.practitioner_repo.update(id, &data).await
    }

    /// Public browse: verified profiles, optionally filtered by
    /// specialization.
    pub async fn browse(
        &self,
        specialization: Option<&str>,
    ) -> Result<Vec<Practitioner>, AppError> {
        self.practitioner_repo.list_verified(specialization).await
    }

    /// Public profile lookup.
    pub async fn get(&self, id: Uuid) -> Result<Practitioner, AppError> {
        self.fetch(id).await
    }

    /// Lists every profile including unverified ones. Admin only.
    pub async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Practitioner>, AppError> {
        Check::Role(UserRole::Admin).authorize(&ctx.actor())?;
        self.practitioner_repo.list_all().await
    }

    /// Admin verification. Requires a recorded certificate reference.
    pub async fn verify(&self, ctx: &RequestContext, id: Uuid) -> Result<Practitioner, AppError> {
        Check::Role(UserRole::Admin).authorize(&ctx.actor())?;

        let practitioner = self.fetch(id).await?;

        match practitioner.certificate_ref.as_deref() {
            Some(reference) if !reference.trim().is_empty() => {}
            _ => {
                return Err(AppError::validation(
                    "Cannot verify a practitioner without a certificate reference",
                ));
            }
        }

        let verified = self.practitioner_repo.set_verified(id).await?;
        info!(practitioner_id = %id, admin_id = %ctx.user_id, "Practitioner verified");
        Ok(verified)
    }

    /// Admin rejection: deletes the profile.
    pub async fn reject(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        Check::Role(UserRole::Admin).authorize(&ctx.actor())?;

        if !self.practitioner_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Practitioner {id} not found")));
        }

        info!(practitioner_id = %id, admin_id = %ctx.user_id, "Practitioner rejected");
        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> Result<Practitioner, AppError> {
        self.practitioner_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Practitioner {id} not found")))
    }
}
