//! Role enum for role-scoped access.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Moderator,
    Admin,
}

impl Role {
    /// Roles a visitor may pick for themselves at registration.
    pub const SELF_ASSIGNABLE: [Role; 3] = [Role::Student, Role::Teacher, Role::Moderator];

    /// Stable upper-case name used in tokens and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Teacher => "TEACHER",
            Role::Moderator => "MODERATOR",
            Role::Admin => "ADMIN",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Returns true if the role can be chosen at self-registration.
    pub fn is_self_assignable(&self) -> bool {
        Self::SELF_ASSIGNABLE.contains(self)
    }

    /// Whether this role may publish audio/video in a live room.
    pub fn can_publish_media(&self) -> bool {
        matches!(self, Role::Teacher | Role::Moderator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    /// Parses a role name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STUDENT" => Ok(Role::Student),
            "TEACHER" => Ok(Role::Teacher),
            "MODERATOR" => Ok(Role::Moderator),
            "ADMIN" => Ok(Role::Admin),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_student() {
        assert_eq!(Role::default(), Role::Student);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("teacher".parse::<Role>().unwrap(), Role::Teacher);
        assert_eq!(" Admin ".parse::<Role>().unwrap(), Role::Admin);
        assert!("janitor".parse::<Role>().is_err());
    }

    #[test]
    fn admin_is_not_self_assignable() {
        assert!(Role::Student.is_self_assignable());
        assert!(Role::Teacher.is_self_assignable());
        assert!(Role::Moderator.is_self_assignable());
        assert!(!Role::Admin.is_self_assignable());
    }

    #[test]
    fn serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Role::Moderator).unwrap(), "\"MODERATOR\"");
        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn only_teachers_and_moderators_publish_media() {
        assert!(Role::Teacher.can_publish_media());
        assert!(Role::Moderator.can_publish_media());
        assert!(!Role::Student.can_publish_media());
        assert!(!Role::Admin.can_publish_media());
    }
}
