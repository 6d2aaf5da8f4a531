//! Practitioner repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use wellbook_core::error::{AppError, ErrorKind};
use wellbook_core::result::AppResult;
use wellbook_entity::practitioner::{CreatePractitioner, Practitioner, UpdatePractitioner};

/// Repository for practitioner profile persistence.
#[derive(Debug, Clone)]
pub struct PractitionerRepository {
    pool: PgPool,
}

impl PractitionerRepository {
    /// Create a new practitioner repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a profile by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Practitioner>> {
        sqlx::query_as::<_, Practitioner>("SELECT * FROM practitioners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find practitioner by id", e)
            })
    }

    /// Find the profile owned by a user.
    pub async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Practitioner>> {
        sqlx::query_as::<_, Practitioner>("SELECT * FROM practitioners WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find practitioner by user", e)
            })
    }

    /// List verified profiles, optionally filtered by specialization
    /// (case-insensitive).
    pub async fn list_verified(
        &self,
        specialization: Option<&str>,
    ) -> AppResult<Vec<Practitioner>> {
        match specialization {
            Some(s) if !s.trim().is_empty() => sqlx::query_as::<_, Practitioner>(
                "SELECT * FROM practitioners \
                 WHERE verified = TRUE AND LOWER(specialization) = LOWER($1) \
                 ORDER BY created_at DESC",
            )
            .bind(s.trim())
            .fetch_all(&self.pool)
            .await,
            _ => {
                sqlx::query_as::<_, Practitioner>(
                    "SELECT * FROM practitioners WHERE verified = TRUE ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list verified practitioners", e)
        })
    }

    /// List every profile, verified or not.
    pub async fn list_all(&self) -> AppResult<Vec<Practitioner>> {
        sqlx::query_as::<_, Practitioner>("SELECT * FROM practitioners ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list practitioners", e)
            })
    }

    /// Create a new profile.
    pub async fn create(&self, data: &CreatePractitioner) -> AppResult<Practitioner> {
        sqlx::query_as::<_, Practitioner>(
            "INSERT INTO practitioners (user_id, display_name, specialization, bio, experience_years) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.display_name)
        .bind(&data.specialization)
        .bind(&data.bio)
        .bind(data.experience_years)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("practitioners_user_id_key") =>
            {
                AppError::duplicate("A practitioner profile already exists for this user")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create practitioner", e),
        })
    }

    /// Apply a partial profile update.
    pub async fn update(&self, id: Uuid, data: &UpdatePractitioner) -> AppResult<Practitioner> {
        sqlx::query_as::<_, Practitioner>(
            "UPDATE practitioners SET display_name = COALESCE($2, display_name), \
                                      specialization = COALESCE($3, specialization), \
                                      bio = COALESCE($4, bio), \
                                      experience_years = COALESCE($5, experience_years), \
                                      updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.display_name)
        .bind(&data.specialization)
        .bind(&data.bio)
        .bind(data.experience_years)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update practitioner", e))?
        .ok_or_else(|| AppError::not_found(format!("Practitioner {id} not found")))
    }

    /// Record the certificate reference for a user's profile.
    pub async fn set_certificate(
        &self,
        user_id: Uuid,
        certificate_ref: &str,
    ) -> AppResult<Practitioner> {
        sqlx::query_as::<_, Practitioner>(
            "UPDATE practitioners SET certificate_ref = $2, updated_at = NOW() \
             WHERE user_id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(certificate_ref)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set certificate", e))?
        .ok_or_else(|| AppError::not_found("Practitioner profile not found"))
    }

    /// Mark a profile as verified.
    pub async fn set_verified(&self, id: Uuid) -> AppResult<Practitioner> {
        sqlx::query_as::<_, Practitioner>(
            "UPDATE practitioners SET verified = TRUE, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to verify practitioner", e))?
        .ok_or_else(|| AppError::not_found(format!("Practitioner {id} not found")))
    }

    /// Delete a profile by primary key.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM practitioners WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete practitioner", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
