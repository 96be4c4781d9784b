//! LoginHandler - Command handler for password login.

use std::sync::Arc;

use super::password::verify_password;
use crate::domain::foundation::AuthError;
use crate::domain::user::{Email, UserAccount};
use crate::ports::{PasswordHasher, SessionToken, TokenIssuer, UserRepository};

/// Command to log in with email and password.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub account: UserAccount,
    pub token: SessionToken,
}

/// Handler for password logins.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            issuer,
        }
    }

    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AuthError> {
        if cmd.email.trim().is_empty() || cmd.password.is_empty() {
            return Err(AuthError::validation("Missing credentials"));
        }

        let email = Email::parse(&cmd.email).map_err(|_| AuthError::InvalidCredentials)?;
        let account = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?
            .ok_or_else(|| {
                tracing::warn!("Login attempt for unknown email");
                AuthError::InvalidCredentials
            })?;

        if !verify_password(&self.hasher, &cmd.password, &account.password_hash).await {
            tracing::warn!(user_id = %account.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.issue(&account.principal())?;

        tracing::info!(user_id = %account.id, "User logged in");
        Ok(LoginResult { account, token })
    }
}
