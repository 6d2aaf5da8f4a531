//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wellbook_auth::authz::Actor;
use wellbook_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted from validated token claims and passed into service methods
/// so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID — the canonical identity key.
    pub user_id: Uuid,
    /// The user's normalized email (convenience field from claims).
    pub email: String,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, email: String, role: UserRole) -> Self {
        Self {
            user_id,
            email,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// The actor this context represents, for predicate evaluation.
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }
}
