//! JWT claims structure carried by access tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wellbook_entity::user::UserRole;

/// Claims payload embedded in every access token.
///
/// Access tokens are self-contained: validating one requires no store
/// access. Refresh tokens are deliberately NOT JWTs — they are opaque
/// random values handled by the refresh token store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Normalized email at the time of issuance.
    pub email: String,
    /// User role at the time of issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the prefixed authority string (`ROLE_USER`, ...) surfaced
    /// at the transport boundary.
    pub fn authority(&self) -> String {
        self.role.authority()
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
