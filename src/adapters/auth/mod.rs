//! Authentication adapters.
//!
//! Implementations of the auth ports:
//!
//! - `jwt` - HS256 session tokens (`TokenIssuer` + `SessionValidator`)
//! - `argon2_hasher` - Argon2id `PasswordHasher`
//! - `mock` - Test implementations that skip real cryptography

mod argon2_hasher;
mod jwt;
mod mock;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt::{JwtSessionManager, SessionClaims};
pub use mock::{MockRoomTokenIssuer, MockSessionValidator, MockTokenIssuer, PlainTextPasswordHasher};
