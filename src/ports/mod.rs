//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ClassroomRepository` - Classrooms, their schedules and enrollments
//! - `UserRepository` - Registered accounts
//!
//! ## Auth Ports
//!
//! - `SessionValidator` - Validates session tokens into an `AuthenticatedUser`
//! - `TokenIssuer` - Signs session tokens
//! - `PasswordHasher` - Hashes and verifies passwords
//! - `RoomTokenIssuer` - Signs live video room access tokens

mod classroom_repository;
mod password_hasher;
mod room_token_issuer;
mod session_issuer;
mod session_validator;
mod user_repository;

pub use classroom_repository::ClassroomRepository;
pub use password_hasher::PasswordHasher;
pub use room_token_issuer::RoomTokenIssuer;
pub use session_issuer::{SessionToken, TokenIssuer};
pub use session_validator::SessionValidator;
pub use user_repository::UserRepository;
