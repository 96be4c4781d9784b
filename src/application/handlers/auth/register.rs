//! RegisterHandler - Command handler for self-registration.

use std::sync::Arc;

use super::password::hash_password;
use crate::domain::foundation::{AuthError, ErrorCode, Role};
use crate::domain::user::{Email, UserAccount};
use crate::ports::{PasswordHasher, SessionToken, TokenIssuer, UserRepository};

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub email: String,
    pub password: String,
    /// Requested role name; `None` means `STUDENT`.
    pub role: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Result of successful registration: the account and a session for it.
#[derive(Debug, Clone)]
pub struct RegisterResult {
    pub account: UserAccount,
    pub token: SessionToken,
}

/// Handler for registering accounts.
pub struct RegisterHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl RegisterHandler {
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

    pub async fn handle(&self, cmd: RegisterCommand) -> Result<RegisterResult, AuthError> {
        // 1. Validate input
        let email = Email::parse(&cmd.email).map_err(|_| AuthError::validation("Invalid email"))?;
        if cmd.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::validation("Password too short"));
        }
        let role = parse_self_assignable_role(cmd.role.as_deref())?;

        // 2. Reject duplicates before paying for a hash
        let existing = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;
        if existing.is_some() {
            return Err(AuthError::EmailTaken);
        }

        // 3. Persist account
        let password_hash = hash_password(&self.hasher, &cmd.password).await?;
        let account = UserAccount::new(email, password_hash, role)
            .with_name(cmd.first_name, cmd.last_name);
        self.users.create(&account).await.map_err(|e| match e.code {
            ErrorCode::EmailTaken => AuthError::EmailTaken,
            _ => AuthError::service_unavailable(e.to_string()),
        })?;

        // 4. Open a session
        let token = self.issuer.issue(&account.principal())?;

        tracing::info!(user_id = %account.id, role = %account.role, "User registered");
        Ok(RegisterResult { account, token })
    }
}

fn parse_self_assignable_role(raw: Option<&str>) -> Result<Role, AuthError> {
    let role = match raw {
        None => Role::Student,
        Some(name) => name
            .parse::<Role>()
            .map_err(|_| AuthError::validation("Invalid role"))?,
    };
    if !role.is_self_assignable() {
        return Err(AuthError::validation("Invalid role"));
    }
    Ok(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::{MockSessionValidator, MockTokenIssuer, PlainTextPasswordHasher};
    use crate::adapters::memory::InMemoryUserRepository;

    fn handler() -> (RegisterHandler, Arc<InMemoryUserRepository>) {
        let users = Arc::new(InMemoryUserRepository::new());
        let issuer = MockTokenIssuer::new(Arc::new(MockSessionValidator::new()));
        let handler = RegisterHandler::new(
            users.clone(),
            Arc::new(PlainTextPasswordHasher),
            Arc::new(issuer),
        );
        (handler, users)
    }

    fn cmd(email: &str, password: &str, role: Option<&str>) -> RegisterCommand {
        RegisterCommand {
            email: email.to_string(),
            password: password.to_string(),
            role: role.map(str::to_string),
            first_name: None,
            last_name: None,
        }
    }

    #[tokio::test]
    async fn registers_student_by_default() {
        let (handler, users) = handler();

        let result = handler
            .handle(cmd("  Ana@Example.com ", "secret1", None))
            .await
            .unwrap();

        assert_eq!(result.account.email.as_str(), "ana@example.com");
        assert_eq!(result.account.role, Role::Student);
        assert_eq!(result.account.password_hash, "plain:secret1");
        assert!(!result.token.value.is_empty());
        let stored = users.find_by_email(&result.account.email).await.unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn keeps_optional_names() {
        let (handler, _) = handler();
        let mut command = cmd("ana@example.com", "secret1", None);
        command.first_name = Some("Ana".to_string());

        let result = handler.handle(command).await.unwrap();

        assert_eq!(result.account.display_name(), Some("Ana".to_string()));
        assert_eq!(result.account.last_name, None);
    }

    #[tokio::test]
    async fn accepts_lowercase_teacher_role() {
        let (handler, _) = handler();
        let result = handler
            .handle(cmd("t@example.com", "secret1", Some("teacher")))
            .await
            .unwrap();
        assert_eq!(result.account.role, Role::Teacher);
    }

    #[tokio::test]
    async fn rejects_admin_role() {
        let (handler, _) = handler();
        let err = handler
            .handle(cmd("a@example.com", "secret1", Some("ADMIN")))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::validation("Invalid role"));
    }

    #[tokio::test]
    async fn rejects_unknown_role() {
        let (handler, _) = handler();
        let err = handler
            .handle(cmd("a@example.com", "secret1", Some("PRINCIPAL")))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::validation("Invalid role"));
    }

    #[tokio::test]
    async fn rejects_email_without_at() {
        let (handler, _) = handler();
        let err = handler
            .handle(cmd("ana.example.com", "secret1", None))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::validation("Invalid email"));
    }

    #[tokio::test]
    async fn rejects_short_password() {
        let (handler, _) = handler();
        let err = handler
            .handle(cmd("ana@example.com", "12345", None))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::validation("Password too short"));
    }

    #[tokio::test]
    async fn rejects_duplicate_email_case_insensitively() {
        let (handler, _) = handler();
        handler
            .handle(cmd("ana@example.com", "secret1", None))
            .await
            .unwrap();

        let err = handler
            .handle(cmd("ANA@example.com", "secret2", None))
            .await
            .unwrap_err();

        assert_eq!(err, AuthError::EmailTaken);
    }
}
