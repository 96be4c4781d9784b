//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{Email, UserAccount};

/// Repository port for registered accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// - `EmailTaken` if an account already uses this email
    /// - `DatabaseError` on persistence failure
    async fn create(&self, account: &UserAccount) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserAccount>, DomainError>;

    /// Look up an account by its normalized email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<UserAccount>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
