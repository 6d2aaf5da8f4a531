//! Role and ownership checks as a small predicate tree.
//!
//! Every mutating operation builds a `Check` from the resource it loaded
//! and evaluates it against the explicit requester identity. Ownership is
//! always compared by user id — the single canonical identity key — and
//! never duplicated ad hoc per endpoint.

use uuid::Uuid;

use wellbook_core::error::AppError;
use wellbook_entity::user::UserRole;

/// The authenticated identity a check is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// The requester's user id.
    pub user_id: Uuid,
    /// The requester's role from validated token claims.
    pub role: UserRole,
}

impl Actor {
    /// Creates an actor.
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }
}

/// An authorization predicate.
#[derive(Debug, Clone)]
pub enum Check {
    /// Requires the given role. Admins satisfy every role check.
    Role(UserRole),
    /// Requires ownership of the resource. Ownership-only: admins do NOT
    /// implicitly pass — compose with `Role(Admin)` where admins may act.
    Owner(Uuid),
    /// Satisfied when any child check passes.
    AnyOf(Vec<Check>),
    /// Satisfied only when every child check passes.
    AllOf(Vec<Check>),
}

impl Check {
    /// The gate used by most mutating endpoints: the resource owner or an
    /// admin.
    pub fn owner_or_admin(owner_id: Uuid) -> Self {
        Self::AnyOf(vec![Self::Owner(owner_id), Self::Role(UserRole::Admin)])
    }

    /// Evaluates this check against an actor.
    pub fn evaluate(&self, actor: &Actor) -> bool {
        match self {
            Self::Role(required) => actor.role == *required || actor.role.is_admin(),
            Self::Owner(owner_id) => actor.user_id == *owner_id,
            Self::AnyOf(checks) => checks.iter().any(|c| c.evaluate(actor)),
            Self::AllOf(checks) => checks.iter().all(|c| c.evaluate(actor)),
        }
    }

    /// Evaluates this check, surfacing a denial as `Forbidden`.
    ///
    /// The message is deliberately opaque — it never reveals which branch
    /// of the predicate failed.
    pub fn authorize(&self, actor: &Actor) -> Result<(), AppError> {
        if self.evaluate(actor) {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "You do not have permission to perform this action",
            ))
        }
    }
}
