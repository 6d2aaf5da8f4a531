//! Refresh token store — creation, verification, revocation, rotation.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use wellbook_core::error::AppError;
use wellbook_core::result::AppResult;
use wellbook_database::repositories::refresh_token::RefreshTokenRepository;
use wellbook_entity::token::RefreshToken;

/// Number of random bytes behind each token value.
const TOKEN_BYTES: usize = 32;

/// Issues and validates opaque refresh tokens.
///
/// Token values are cryptographically random — not signed, not structured,
/// not decodable. All state (expiry, revocation) lives in the store, which
/// is what makes immediate revocation possible.
#[derive(Debug, Clone)]
pub struct RefreshTokenStore {
    /// Token persistence.
    repo: Arc<RefreshTokenRepository>,
    /// Token TTL in days.
    ttl_days: i64,
}

impl RefreshTokenStore {
    /// Creates a new store with the configured TTL.
    pub fn new(repo: Arc<RefreshTokenRepository>, ttl_days: u64) -> Self {
        Self {
            repo,
            ttl_days: ttl_days as i64,
        }
    }

    /// Generates and persists a fresh token for the given user.
    pub async fn create(&self, user_id: Uuid) -> AppResult<RefreshToken> {
        let token = generate_token_value();
        let expires_at = Utc::now() + chrono::Duration::days(self.ttl_days);

        let row = self.repo.insert(&token, user_id, expires_at).await?;
        debug!(user_id = %user_id, expires_at = %expires_at, "Issued refresh token");
        Ok(row)
    }

    /// Looks up a token row by its opaque value.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        self.repo.find_by_token(token).await
    }

    /// Verifies a token row against revocation and expiry.
    ///
    /// An expired row is deleted as a side effect so the token cannot be
    /// retried.
    pub async fn verify_expiration(&self, token: &RefreshToken) -> AppResult<()> {
        if let Err(err) = token.validate() {
            if !token.revoked && token.is_expired() {
                self.repo.delete(token.id).await?;
            }
            return Err(err);
        }
        Ok(())
    }

    /// Atomically claims a live token for rotation, revoking it in the
    /// same statement.
    ///
    /// Exactly one concurrent caller can win the claim; a refresh racing a
    /// logout (or another refresh) observes the already-revoked row and
    /// fails, so a revoked token can never mint a new access token.
    pub async fn claim_for_rotation(&self, token_value: &str) -> AppResult<RefreshToken> {
        if let Some(claimed) = self.repo.claim(token_value).await? {
            return Ok(claimed);
        }

        // Claim failed: absent, revoked, or expired. Read back to say which.
        match self.repo.find_by_token(token_value).await? {
            None => Err(AppError::token_invalid("Refresh token not recognized")),
            Some(row) => {
                self.verify_expiration(&row).await?;
                // The row was live at read time, so another claimer won the
                // race between our UPDATE and this SELECT.
                Err(AppError::token_revoked("Refresh token has been revoked"))
            }
        }
    }

    /// Revokes a token by its opaque value.
    ///
    /// Idempotent: revoking an unknown or already-revoked token succeeds
    /// silently, which keeps logout safe to retry.
    pub async fn revoke(&self, token_value: &str) -> AppResult<()> {
        let affected = self.repo.revoke(token_value).await?;
        if affected == 0 {
            debug!("Revoke requested for unknown refresh token");
        } else {
            info!("Refresh token revoked");
        }
        Ok(())
    }
}

/// Generates an unguessable opaque token value.
fn generate_token_value() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_values_are_unique_and_url_safe() {
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let value = generate_token_value();
            assert!(value.len() >= 40, "expected ~43 chars for 32 bytes");
            assert!(
                value
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            );
            assert!(seen.insert(value), "token values must not repeat");
        }
    }
}
