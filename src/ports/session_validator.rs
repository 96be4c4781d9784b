//! Session validation port.
//!
//! HTTP middleware hands the raw token from the session cookie or the
//! `Authorization: Bearer` header to this port and gets back the caller's
//! identity.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates session tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature
/// - Validate the expiry claim
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a session token and return the authenticated user.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw token (without "Bearer " prefix)
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
