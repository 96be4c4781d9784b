//! In-memory adapters.
//!
//! Used by tests and by database-less development runs. State lives for the
//! lifetime of the process and is never shared between servers.

mod classroom_repository;
mod user_repository;

pub use classroom_repository::InMemoryClassroomRepository;
pub use user_repository::InMemoryUserRepository;
