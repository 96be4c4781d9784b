//! Live-room access token port.

use crate::domain::classroom::RoomGrant;
use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Issues access tokens for the live video service.
pub trait RoomTokenIssuer: Send + Sync {
    /// Sign a token letting `user` join the room described by `grant`.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` if signing fails
    fn issue(&self, user: &AuthenticatedUser, grant: &RoomGrant) -> Result<String, AuthError>;
}
