//! Mock authentication adapters for testing.
//!
//! These adapters implement the auth ports without real cryptography so
//! handler tests stay fast and deterministic.
//!
//! # Example
//!
//! ```ignore
//! use immagreat::adapters::auth::MockSessionValidator;
//! use immagreat::domain::foundation::{AuthenticatedUser, Role, UserId};
//!
//! let validator = MockSessionValidator::new()
//!     .with_user("valid-token", AuthenticatedUser::new(
//!         UserId::new(),
//!         "teacher@example.com",
//!         Role::Teacher,
//!     ));
//!
//! let result = validator.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::classroom::RoomGrant;
use crate::domain::foundation::{AuthError, AuthenticatedUser, Role, Timestamp, UserId};
use crate::ports::{
    PasswordHasher, RoomTokenIssuer, SessionToken, SessionValidator, TokenIssuer,
};

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated users
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Adds a valid token for a fresh user with the given role.
    ///
    /// The email is derived from the token: `<token>@test.example.com`.
    pub fn with_role(self, token: impl Into<String>, role: Role) -> Self {
        let token = token.into();
        let user = AuthenticatedUser::new(UserId::new(), format!("{}@test.example.com", token), role);
        self.with_user(token, user)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        if let Ok(mut forced) = self.force_error.write() {
            *forced = Some(error);
        }
        self
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.insert(token.into(), user);
        }
    }

    /// Returns the user registered for a token.
    pub fn user_for(&self, token: &str) -> Option<AuthenticatedUser> {
        self.tokens.read().ok()?.get(token).cloned()
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.force_error.read().ok().and_then(|e| e.clone()) {
            return Err(error);
        }
        self.user_for(token).ok_or(AuthError::InvalidToken)
    }
}

/// Token issuer that mints `mock-<user id>` tokens and remembers them in a
/// shared [`MockSessionValidator`].
pub struct MockTokenIssuer {
    validator: std::sync::Arc<MockSessionValidator>,
    ttl_secs: u64,
}

impl MockTokenIssuer {
    pub fn new(validator: std::sync::Arc<MockSessionValidator>) -> Self {
        Self {
            validator,
            ttl_secs: 3600,
        }
    }
}

impl TokenIssuer for MockTokenIssuer {
    fn issue(&self, user: &AuthenticatedUser) -> Result<SessionToken, AuthError> {
        let value = format!("mock-{}", user.id);
        self.validator.add_token(value.clone(), user.clone());
        Ok(SessionToken {
            value,
            expires_at: Timestamp::now().plus_secs(self.ttl_secs),
        })
    }

    fn session_ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}

/// Reversible "hasher" for tests: stores `plain:<password>`.
#[derive(Debug, Default, Clone)]
pub struct PlainTextPasswordHasher;

impl PasswordHasher for PlainTextPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("plain:{}", password))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        stored_hash.strip_prefix("plain:") == Some(password)
    }
}

/// Room token issuer returning a readable, unsigned description of the grant.
#[derive(Debug, Default, Clone)]
pub struct MockRoomTokenIssuer;

impl RoomTokenIssuer for MockRoomTokenIssuer {
    fn issue(&self, user: &AuthenticatedUser, grant: &RoomGrant) -> Result<String, AuthError> {
        Ok(format!(
            "room-token:{}:{}:publish={}",
            grant.room, user.id, grant.can_publish
        ))
    }
}
