//! Classroom repository port.
//!
//! The schedule source the calendar reads from, and the store the classroom
//! handlers write to.

use async_trait::async_trait;

use crate::domain::classroom::Classroom;
use crate::domain::foundation::{ClassroomId, DomainError, UserId};

/// Repository port for Classroom aggregate persistence.
///
/// All listings are ordered by `created_at` descending (newest first).
#[async_trait]
pub trait ClassroomRepository: Send + Sync {
    /// Save a new classroom together with its enrollments, atomically.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, classroom: &Classroom) -> Result<(), DomainError>;

    /// Find a classroom by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ClassroomId) -> Result<Option<Classroom>, DomainError>;

    /// Every classroom. Used for admin views.
    async fn list_all(&self) -> Result<Vec<Classroom>, DomainError>;

    /// Classrooms owned by a teacher.
    async fn list_by_teacher(&self, teacher_id: &UserId) -> Result<Vec<Classroom>, DomainError>;

    /// Classrooms a user is enrolled in.
    async fn list_by_enrolled_user(&self, user_id: &UserId) -> Result<Vec<Classroom>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classroom_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ClassroomRepository) {}
    }
}
