//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user extracted from a signed session
//! token. They have **no external dependencies** - the token format lives in
//! the `adapters::auth` module and populates them via the `SessionValidator` port.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Role, UserId};

/// Authenticated user extracted from a validated session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// The account identifier (`sub` claim).
    pub id: UserId,

    /// Email address at the time the token was issued.
    pub email: String,

    /// Role at the time the token was issued.
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }

    /// Returns true if the user holds one of the given roles.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}

/// Authentication errors.
///
/// These errors are **domain-centric** - they describe what went wrong
/// from the application's perspective, not the token library's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token signature is valid but it has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Unknown email or wrong password. Deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration with an email that already has an account.
    #[error("Email already registered")]
    EmailTaken,

    /// User is authenticated but lacks the role required for this action.
    #[error("Insufficient permissions")]
    InsufficientPermissions,

    /// Request payload failed validation.
    #[error("{0}")]
    Validation(String),

    /// A backing service (store, hasher, signer) failed.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true if this error indicates the user should log in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
