//! Practitioner profile model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A practitioner profile, tied 1:1 to a user.
///
/// Profiles start unverified. An admin may verify a profile only after a
/// certificate reference has been recorded, or reject it, which deletes
/// the profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Practitioner {
    /// Unique profile identifier.
    pub id: Uuid,
    /// The owning user (unique — one profile per user).
    pub user_id: Uuid,
    /// Public display name.
    pub display_name: String,
    /// Area of practice, e.g. "yoga" or "physiotherapy".
    pub specialization: String,
    /// Free-text biography.
    pub bio: Option<String>,
    /// Years of professional experience.
    pub experience_years: i32,
    /// Opaque reference to an uploaded certificate. Storage itself is an
    /// external collaborator; the platform only records the reference.
    pub certificate_ref: Option<String>,
    /// Whether an admin has verified this profile.
    pub verified: bool,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a practitioner profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePractitioner {
    /// The owning user.
    pub user_id: Uuid,
    /// Public display name.
    pub display_name: String,
    /// Area of practice.
    pub specialization: String,
    /// Free-text biography.
    pub bio: Option<String>,
    /// Years of professional experience.
    pub experience_years: i32,
}

/// Partial update of a practitioner profile. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePractitioner {
    /// New display name.
    pub display_name: Option<String>,
    /// New specialization.
    pub specialization: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// New experience figure.
    pub experience_years: Option<i32>,
}
