//! Customer entity - an authenticatable account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access role attached to a customer account.
///
/// The role travels as a token claim and is checked at the HTTP boundary;
/// domain entities never consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    /// Stable string form used in storage and token claims
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Member => "MEMBER",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "MEMBER" => Ok(Self::Member),
            _ => Err(UnknownRole),
        }
    }
}

/// Error when parsing a role from its stored string form
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown role")]
pub struct UnknownRole;

/// Customer entity
///
/// The credential hash is persisted alongside the row but never lives on the
/// entity, so it cannot leak through serialization or logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Update the profile names
    pub fn set_names(&mut self, name: String, last_name: String) {
        self.name = name;
        self.last_name = last_name;
        self.updated_at = Utc::now();
    }

    /// Mark the account inactive (soft delete)
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }
}

/// Data for creating a customer; the id is assigned by storage
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        let now = Utc::now();
        Customer {
            id: 1,
            name: "Joao".to_string(),
            last_name: "Ninguem".to_string(),
            email: "joao@email.com".to_string(),
            role: Role::Member,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "Joao Ninguem");
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("MEMBER".parse::<Role>().unwrap(), Role::Member);
        assert_eq!(Role::Admin.as_str(), "ADMIN");
        assert!("OWNER".parse::<Role>().is_err());
    }

    #[test]
    fn test_is_admin() {
        let mut customer = sample();
        assert!(!customer.is_admin());
        customer.role = Role::Admin;
        assert!(customer.is_admin());
    }

    #[test]
    fn test_deactivate() {
        let mut customer = sample();
        customer.deactivate();
        assert!(!customer.active);
    }
}
