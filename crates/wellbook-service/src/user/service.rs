//! User registration and profile lookup.

use std::sync::Arc;

use tracing::info;

use wellbook_auth::password::PasswordHasher;
use wellbook_core::error::AppError;
use wellbook_core::types::normalize_email;
use wellbook_database::repositories::user::UserRepository;
use wellbook_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Implements registration and profile use cases.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User persistence.
    user_repo: Arc<UserRepository>,
    /// Password hashing.
    hasher: Arc<PasswordHasher>,
    /// Minimum accepted password length.
    password_min_length: usize,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        password_min_length: usize,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            password_min_length,
        }
    }

    /// Registers a new user.
    ///
    /// The email is normalized before storage and the role is always
    /// `User` — a role in the request payload is ignored. The raw password
    /// is hashed immediately and never stored or logged.
    pub async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        let name = name.trim();
        let name = if name.is_empty() { "User" } else { name };

        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                name: name.to_string(),
                password_hash,
                role: UserRole::User,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Returns the caller's own profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
