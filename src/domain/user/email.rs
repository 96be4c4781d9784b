//! Email address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Maximum accepted length of an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// A normalized email address: trimmed, lowercased, containing `@`.
///
/// Two accounts cannot share an `Email`, so normalization is what makes
/// `" Ana@Example.com"` and `"ana@example.com"` the same login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Normalizes and validates a raw address.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if blank after trimming
    /// - `InvalidFormat` if there is no `@` or the address is too long
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !normalized.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing '@'"));
        }
        if normalized.len() > MAX_EMAIL_LENGTH {
            return Err(ValidationError::invalid_format(
                "email",
                format!("must be at most {} characters", MAX_EMAIL_LENGTH),
            ));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
