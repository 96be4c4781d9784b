//! Authentication command handlers.

mod login;
mod password;
mod register;

pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use register::{RegisterCommand, RegisterHandler, RegisterResult, MIN_PASSWORD_LENGTH};
