//! Classroom read model with the teacher and student accounts resolved.

use crate::domain::classroom::{Classroom, ClassroomError};
use crate::domain::user::UserAccount;
use crate::ports::UserRepository;

/// A classroom together with the accounts it references.
#[derive(Debug, Clone)]
pub struct ClassroomDetails {
    pub classroom: Classroom,
    /// `None` if the owning account no longer exists.
    pub teacher: Option<UserAccount>,
    pub students: Vec<UserAccount>,
}

impl ClassroomDetails {
    /// Looks up the owner and enrolled accounts. Missing accounts are dropped.
    pub async fn resolve(
        classroom: Classroom,
        users: &dyn UserRepository,
    ) -> Result<Self, ClassroomError> {
        let teacher = users.find_by_id(classroom.teacher_id()).await?;

        let mut students = Vec::with_capacity(classroom.enrolled().len());
        for user_id in classroom.enrolled() {
            if let Some(account) = users.find_by_id(user_id).await? {
                students.push(account);
            }
        }

        Ok(Self {
            classroom,
            teacher,
            students,
        })
    }
}
