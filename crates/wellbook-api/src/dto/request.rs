//! Request DTOs with validation.
//!
//! Create payloads deliberately carry no owner or status fields — both are
//! derived server-side from the authenticated identity and the lifecycle
//! rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address. Normalized (lowercase, trimmed) before storage.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Display name.
    pub name: Option<String>,
    /// Raw password. Hashed immediately, never stored.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body. The token is optional at the serde layer
/// so that a missing field surfaces as a 400 validation error rather than
/// a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// The opaque refresh token.
    pub refresh_token: Option<String>,
}

/// Logout request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// The opaque refresh token to revoke.
    pub refresh_token: Option<String>,
}

/// Create booking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// Target practitioner profile.
    pub practitioner_id: Uuid,
    /// Requested appointment time.
    pub slot: DateTime<Utc>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Update booking details request (slot and notes only — status moves
/// through the transition endpoints).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingRequest {
    /// New appointment time.
    pub slot: Option<DateTime<Utc>>,
    /// New notes.
    pub notes: Option<String>,
}

/// Create practitioner profile request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePractitionerRequest {
    /// Public display name.
    #[validate(length(min = 1, max = 120, message = "Display name is required"))]
    pub display_name: String,
    /// Area of practice.
    #[validate(length(min = 1, max = 120, message = "Specialization is required"))]
    pub specialization: String,
    /// Free-text biography.
    pub bio: Option<String>,
    /// Years of professional experience.
    pub experience_years: Option<i32>,
}

/// Update practitioner profile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePractitionerRequest {
    /// New display name.
    pub display_name: Option<String>,
    /// New specialization.
    pub specialization: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// New experience figure.
    pub experience_years: Option<i32>,
}

/// Certificate reference request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CertificateRequest {
    /// Opaque reference to the uploaded certificate.
    #[validate(length(min = 1, message = "Certificate reference is required"))]
    pub certificate_ref: String,
}

/// Practitioner browse query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowsePractitionersQuery {
    /// Optional case-insensitive specialization filter.
    pub specialization: Option<String>,
}

/// Create product request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    /// Product name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Long description.
    pub description: Option<String>,
    /// Unit price.
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    /// Units in stock.
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,
    /// Catalog category.
    pub category: Option<String>,
}

/// Update product request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New price.
    pub price: Option<f64>,
    /// New stock figure.
    pub stock: Option<i32>,
    /// New category.
    pub category: Option<String>,
}
