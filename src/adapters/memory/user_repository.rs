//! In-memory user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{Email, UserAccount};
use crate::ports::UserRepository;

/// Account store keyed by id, with a unique email index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<State>>,
}

#[derive(Debug, Default)]
struct State {
    by_id: HashMap<UserId, UserAccount>,
    by_email: HashMap<Email, UserId>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, account: &UserAccount) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.by_email.contains_key(&account.email) {
            return Err(
                DomainError::new(ErrorCode::EmailTaken, "Email already registered")
                    .with_detail("email", account.email.as_str()),
            );
        }
        state.by_email.insert(account.email.clone(), account.id);
        state.by_id.insert(account.id, account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserAccount>, DomainError> {
        Ok(self.state.read().await.by_id.get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<UserAccount>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .by_email
            .get(email)
            .and_then(|id| state.by_id.get(id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Role;

    fn account(email: &str) -> UserAccount {
        UserAccount::new(Email::parse(email).unwrap(), "hash".to_string(), Role::Student)
    }

    #[tokio::test]
    async fn create_and_find() {
        let repo = InMemoryUserRepository::new();
        let acc = account("ana@example.com");
        repo.create(&acc).await.unwrap();

        assert_eq!(repo.find_by_id(&acc.id).await.unwrap(), Some(acc.clone()));
        let by_email = repo
            .find_by_email(&Email::parse("ANA@example.com").unwrap())
            .await
            .unwrap();
        assert_eq!(by_email.map(|a| a.id), Some(acc.id));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(&account("ana@example.com")).await.unwrap();

        let err = repo.create(&account("ana@example.com")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::EmailTaken);
    }

    #[tokio::test]
    async fn unknown_email_is_none() {
        let repo = InMemoryUserRepository::new();
        let found = repo
            .find_by_email(&Email::parse("ghost@example.com").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
