//! User account entity.

use serde::Serialize;

use super::Email;
use crate::domain::foundation::{AuthenticatedUser, Role, Timestamp, UserId};

/// A registered account.
///
/// Holds the password hash as an opaque PHC string; hashing and verification
/// live behind the `PasswordHasher` port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAccount {
    pub id: UserId,
    pub email: Email,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: Timestamp,
}

impl UserAccount {
    /// Creates a fresh account with a new id.
    pub fn new(email: Email, password_hash: String, role: Role) -> Self {
        Self {
            id: UserId::new(),
            email,
            password_hash,
            role,
            first_name: None,
            last_name: None,
            created_at: Timestamp::now(),
        }
    }

    /// Sets the optional name parts; blank parts are dropped.
    pub fn with_name(mut self, first: Option<String>, last: Option<String>) -> Self {
        self.first_name = non_blank(first);
        self.last_name = non_blank(last);
        self
    }

    /// "First Last", whichever parts are present, or `None`.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// The identity a session token is issued for.
    pub fn principal(&self) -> AuthenticatedUser {
        AuthenticatedUser::new(self.id, self.email.as_str(), self.role)
    }
}

fn non_blank(part: Option<String>) -> Option<String> {
    part.map(|p| p.trim().to_string()).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> UserAccount {
        UserAccount::new(
            Email::parse("ana@example.com").unwrap(),
            "$argon2id$stub".to_string(),
            Role::Teacher,
        )
    }

    #[test]
    fn principal_carries_identity_and_role() {
        let acc = account();
        let principal = acc.principal();
        assert_eq!(principal.id, acc.id);
        assert_eq!(principal.email, "ana@example.com");
        assert_eq!(principal.role, Role::Teacher);
    }

    #[test]
    fn display_name_joins_present_parts() {
        assert_eq!(account().display_name(), None);
        assert_eq!(
            account()
                .with_name(Some("Ana".to_string()), Some(" Lopez ".to_string()))
                .display_name(),
            Some("Ana Lopez".to_string())
        );
        assert_eq!(
            account()
                .with_name(Some("  ".to_string()), Some("Lopez".to_string()))
                .display_name(),
            Some("Lopez".to_string())
        );
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let json = serde_json::to_value(account()).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
