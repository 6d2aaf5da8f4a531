//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token configuration.
///
/// `jwt_secret` deliberately has no default. Token signing requires a
/// high-entropy secret; deployments must provide one of at least
/// [`MIN_JWT_SECRET_BYTES`] bytes or startup fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl_days: u64,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

/// Minimum acceptable JWT secret length in bytes.
pub const MIN_JWT_SECRET_BYTES: usize = 32;

impl AuthConfig {
    /// Validates the deploy-time contract on the signing secret.
    pub fn validate_secret(&self) -> Result<(), crate::error::AppError> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(crate::error::AppError::configuration(format!(
                "JWT secret must be at least {MIN_JWT_SECRET_BYTES} bytes, got {}",
                self.jwt_secret.len()
            )));
        }
        Ok(())
    }
}

fn default_access_ttl() -> u64 {
    60
}

fn default_refresh_ttl() -> u64 {
    7
}

fn default_password_min() -> usize {
    8
}
