//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular end user who books sessions.
    User,
    /// Service practitioner offering sessions.
    Practitioner,
    /// Platform administrator.
    Admin,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Practitioner => "practitioner",
            Self::Admin => "admin",
        }
    }

    /// Return the prefixed authority string used at the transport boundary,
    /// e.g. `ROLE_USER`.
    pub fn authority(&self) -> String {
        format!("ROLE_{}", self.as_str().to_uppercase())
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = wellbook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "practitioner" => Ok(Self::Practitioner),
            "admin" => Ok(Self::Admin),
            _ => Err(wellbook_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: user, practitioner, admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("user".parse::<UserRole>().unwrap(), UserRole::User);
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("superuser".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_authority_prefix() {
        assert_eq!(UserRole::User.authority(), "ROLE_USER");
        assert_eq!(UserRole::Practitioner.authority(), "ROLE_PRACTITIONER");
        assert_eq!(UserRole::Admin.authority(), "ROLE_ADMIN");
    }
}
