//! Refresh token repository implementation.
//!
//! The claim operation is a single conditional UPDATE so that a refresh
//! racing a logout (or another refresh) on the same token resolves
//! atomically — exactly one caller wins.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use wellbook_core::error::{AppError, ErrorKind};
use wellbook_core::result::AppResult;
use wellbook_entity::token::RefreshToken;

/// Repository for refresh token persistence.
#[derive(Debug, Clone)]
pub struct RefreshTokenRepository {
    pool: PgPool,
}

impl RefreshTokenRepository {
    /// Create a new refresh token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a freshly generated token.
    pub async fn insert(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> AppResult<RefreshToken> {
        sqlx::query_as::<_, RefreshToken>(
            "INSERT INTO refresh_tokens (token, user_id, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert refresh token", e)
        })
    }

    /// Find a token row by its opaque value.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        sqlx::query_as::<_, RefreshToken>("SELECT * FROM refresh_tokens WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find refresh token", e)
            })
    }

    /// Atomically claim a live token, revoking it in the same statement.
    ///
    /// Returns the claimed row, or `None` when the token is absent,
    /// already revoked, or past expiry — the caller distinguishes those
    /// cases with a follow-up read.
    pub async fn claim(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        sqlx::query_as::<_, RefreshToken>(
            "UPDATE refresh_tokens SET revoked = TRUE \
             WHERE token = $1 AND revoked = FALSE AND expires_at > NOW() \
             RETURNING *",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to claim refresh token", e)
        })
    }

    /// Mark a token revoked by its opaque value.
    ///
    /// Returns how many rows were affected; revoking an unknown token is
    /// not an error at this layer.
    pub async fn revoke(&self, token: &str) -> AppResult<u64> {
        let result =
            sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE token = $1")
                .bind(token)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to revoke refresh token", e)
                })?;
        Ok(result.rows_affected())
    }

    /// Delete a token row by primary key. Used when expiry is detected so
    /// the token cannot be retried.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM refresh_tokens WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete refresh token", e)
            })?;
        Ok(())
    }

    /// Delete every token past its expiry. Maintenance helper.
    pub async fn delete_expired(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete expired tokens", e)
            })?;
        Ok(result.rows_affected())
    }
}
