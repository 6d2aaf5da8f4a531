//! Session lifecycle manager — login, refresh, and logout flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use wellbook_core::error::AppError;
use wellbook_database::repositories::user::UserRepository;
use wellbook_entity::user::User;

use crate::credentials::CredentialVerifier;
use crate::jwt::JwtEncoder;
use crate::refresh::RefreshTokenStore;

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResult {
    /// Signed access token.
    pub access_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Opaque refresh token.
    pub refresh_token: String,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: User,
}

/// Result of a successful refresh. The refresh token is rotated: the
/// returned value replaces the one the caller presented.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RefreshResult {
    /// New signed access token.
    pub access_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// New opaque refresh token.
    pub refresh_token: String,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
}

/// Orchestrates the authentication flows.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Credential verification.
    credentials: Arc<CredentialVerifier>,
    /// Access token issuance.
    jwt_encoder: Arc<JwtEncoder>,
    /// Refresh token lifecycle.
    refresh_store: Arc<RefreshTokenStore>,
    /// User lookup for the refresh flow.
    user_repo: Arc<UserRepository>,
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        credentials: Arc<CredentialVerifier>,
        jwt_encoder: Arc<JwtEncoder>,
        refresh_store: Arc<RefreshTokenStore>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            credentials,
            jwt_encoder,
            refresh_store,
            user_repo,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Verify credentials (uniform failure)
    /// 2. Mint a signed access token
    /// 3. Mint an opaque refresh token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self.credentials.verify(email, password).await?;

        let (access_token, access_expires_at) = self.jwt_encoder.issue(&user)?;
        let refresh = self.refresh_store.create(user.id).await?;

        info!(user_id = %user.id, role = %user.role, "Login successful");

        Ok(LoginResult {
            access_token,
            access_expires_at,
            refresh_token: refresh.token,
            refresh_expires_at: refresh.expires_at,
            user,
        })
    }

    /// Exchanges a refresh token for a new access token, rotating the
    /// refresh token in the same flow.
    ///
    /// The presented token is claimed atomically; once claimed it is
    /// revoked and a replacement is issued. The current user record is
    /// re-read so a role change takes effect on the next access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResult, AppError> {
        let claimed = self.refresh_store.claim_for_rotation(refresh_token).await?;

        let user = self
            .user_repo
            .find_by_id(claimed.user_id)
            .await?
            .ok_or_else(|| AppError::token_invalid("Refresh token no longer maps to a user"))?;

        let (access_token, access_expires_at) = self.jwt_encoder.issue(&user)?;
        let replacement = self.refresh_store.create(user.id).await?;

        info!(user_id = %user.id, "Access token refreshed");

        Ok(RefreshResult {
            access_token,
            access_expires_at,
            refresh_token: replacement.token,
            refresh_expires_at: replacement.expires_at,
        })
    }

    /// Revokes a refresh token. Idempotent: logging out with an unknown
    /// token is acknowledged without error.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        self.refresh_store.revoke(refresh_token).await
    }
}
