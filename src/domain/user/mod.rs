//! User domain module.
//!
//! Registered accounts and their normalized email addresses. Account
//! failures surface as `AuthError` through the auth handlers.

mod account;
mod email;

pub use account::UserAccount;
pub use email::{Email, MAX_EMAIL_LENGTH};
