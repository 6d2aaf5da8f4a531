//! Email + password verification.

use std::sync::Arc;

use tracing::debug;

use wellbook_core::error::AppError;
use wellbook_core::types::normalize_email;
use wellbook_database::repositories::user::UserRepository;
use wellbook_entity::user::User;

use crate::password::PasswordHasher;

/// Verifies login credentials against stored password hashes.
///
/// Failure is uniform: an unknown email and a wrong password produce the
/// same `InvalidCredentials` error, so callers cannot probe which emails
/// are registered. The check has no side effects — no attempt counters,
/// no lockout.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    /// User lookup.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl CredentialVerifier {
    /// Creates a new credential verifier.
    pub fn new(user_repo: Arc<UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// Verifies the given email and password, returning the user on
    /// success.
    pub async fn verify(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email);

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            debug!("Login attempt for unknown email");
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::invalid_credentials());
        }

        Ok(user)
    }
}
