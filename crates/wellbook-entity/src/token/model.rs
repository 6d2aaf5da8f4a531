//! Refresh token model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use wellbook_core::AppError;

/// A long-lived refresh token backing the re-authentication flow.
///
/// The token value is an opaque random string — not a structured or signed
/// token, and not decodable. Once revoked or past expiry a token is never
/// accepted again.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RefreshToken {
    /// Unique row identifier.
    pub id: Uuid,
    /// The opaque token value presented by clients.
    pub token: String,
    /// The user this token belongs to.
    pub user_id: Uuid,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// Whether the token has been revoked (logout or rotation).
    pub revoked: bool,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Check whether the token is past its expiry.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Validates the token against revocation and expiry.
    ///
    /// Revocation is checked first: a token that is both revoked and
    /// expired reports revocation, since revocation is the stronger,
    /// deliberate signal.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.revoked {
            return Err(AppError::token_revoked("Refresh token has been revoked"));
        }
        if self.is_expired() {
            return Err(AppError::token_expired(
                "Refresh token has expired. Please log in again",
            ));
        }
        Ok(())
    }
}
