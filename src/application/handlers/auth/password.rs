//! Password hashing off the async workers.
//!
//! Both directions run on tokio's blocking pool.

use std::sync::Arc;

use tokio::task;

use crate::domain::foundation::AuthError;
use crate::ports::PasswordHasher;

pub(super) async fn hash_password(
    hasher: &Arc<dyn PasswordHasher>,
    password: &str,
) -> Result<String, AuthError> {
    let hasher = Arc::clone(hasher);
    let password = password.to_owned();
    task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing task failed");
            AuthError::service_unavailable("Password hashing failed")
        })?
}

/// A failed verification task counts as a mismatch.
pub(super) async fn verify_password(
    hasher: &Arc<dyn PasswordHasher>,
    password: &str,
    stored_hash: &str,
) -> bool {
    let hasher = Arc::clone(hasher);
    let password = password.to_owned();
    let stored_hash = stored_hash.to_owned();
    task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            false
        })
}
