//! Session token issuance port.

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp};

/// A signed session token and the moment it stops being accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub value: String,
    pub expires_at: Timestamp,
}

/// Signs session tokens after a successful login or registration.
///
/// Tokens issued here must be accepted by the matching `SessionValidator`
/// until `expires_at`.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &AuthenticatedUser) -> Result<SessionToken, AuthError>;

    /// Lifetime of issued tokens, used for the cookie `Max-Age`.
    fn session_ttl_secs(&self) -> u64;
}
