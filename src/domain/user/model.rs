//! Account domain entity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// Closed set of roles an account can hold.
///
/// There is no hierarchy between roles: an endpoint admits exactly the
/// roles it lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Dispatcher,
    Engineer,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Dispatcher, UserRole::Engineer, UserRole::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dispatcher => "dispatcher",
            Self::Engineer => "engineer",
            Self::Admin => "admin",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Engineer
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    /// Exact, case-sensitive match against the role names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::InvalidRole(s.to_string()))
    }
}

/// Account record. `password_hash` never leaves the service layer.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("engineer".parse::<UserRole>().unwrap(), UserRole::Engineer);
        assert_eq!("dispatcher".parse::<UserRole>().unwrap(), UserRole::Dispatcher);
    }

    #[test]
    fn rejects_unknown_roles() {
        for raw in ["Admin", "operator", "", " admin"] {
            let err = raw.parse::<UserRole>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidRole(_)), "{raw:?}");
        }
    }

    #[test]
    fn registration_default_is_engineer() {
        assert_eq!(UserRole::default(), UserRole::Engineer);
    }
}
