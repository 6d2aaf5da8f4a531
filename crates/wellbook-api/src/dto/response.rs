//! Response DTOs.
//!
//! Domain entities that are safe to expose (bookings, practitioners,
//! products, notifications) serialize directly; auth and user responses
//! get dedicated shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// The new user's id.
    pub id: Uuid,
    /// The normalized email the account was registered under.
    pub email: String,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed access token.
    pub access_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Opaque refresh token.
    pub refresh_token: String,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// The authenticated user's role.
    pub role: String,
    /// The authenticated user's id.
    pub user_id: Uuid,
}

/// Refresh response. Carries the rotated refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// New signed access token.
    pub access_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// New opaque refresh token replacing the presented one.
    pub refresh_token: String,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id.
    pub id: Uuid,
    /// Normalized email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role.
    pub role: String,
    /// Prefixed authority string (`ROLE_USER`, ...) used for
    /// authorization matching at the boundary.
    pub authority: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Unread notification count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    /// Count value.
    pub count: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Status.
    pub status: String,
    /// Database connectivity.
    pub database: String,
}
