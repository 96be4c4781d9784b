//! Password hashing port.

use crate::domain::foundation::AuthError;

/// One-way password hashing with salted, self-describing output.
///
/// Implementations return and accept PHC strings, so the algorithm and its
/// parameters travel with each stored hash.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` if the hashing backend fails
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// A malformed stored hash verifies as false.
    fn verify(&self, password: &str, stored_hash: &str) -> bool;
}
