//! Listing handlers for the teacher and student classroom pages.

use std::sync::Arc;

use super::ClassroomDetails;
use crate::domain::classroom::{Classroom, ClassroomError};
use crate::domain::foundation::{AuthenticatedUser, Role};
use crate::ports::{ClassroomRepository, UserRepository};

/// Lists the classrooms a teacher owns. Admins see every classroom.
pub struct ListTeacherClassroomsHandler {
    classrooms: Arc<dyn ClassroomRepository>,
    users: Arc<dyn UserRepository>,
}

impl ListTeacherClassroomsHandler {
    pub fn new(classrooms: Arc<dyn ClassroomRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { classrooms, users }
    }

    pub async fn handle(
        &self,
        viewer: &AuthenticatedUser,
    ) -> Result<Vec<ClassroomDetails>, ClassroomError> {
        let found = match viewer.role {
            Role::Admin => self.classrooms.list_all().await?,
            Role::Teacher => self.classrooms.list_by_teacher(&viewer.id).await?,
            Role::Student | Role::Moderator => return Err(ClassroomError::forbidden()),
        };
        resolve_all(found, self.users.as_ref()).await
    }
}

/// Lists the classrooms the caller is enrolled in.
pub struct ListStudentClassroomsHandler {
    classrooms: Arc<dyn ClassroomRepository>,
    users: Arc<dyn UserRepository>,
}

impl ListStudentClassroomsHandler {
    pub fn new(classrooms: Arc<dyn ClassroomRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { classrooms, users }
    }

    pub async fn handle(
        &self,
        viewer: &AuthenticatedUser,
    ) -> Result<Vec<ClassroomDetails>, ClassroomError> {
        if !viewer.has_any_role(&[Role::Student, Role::Admin]) {
            return Err(ClassroomError::forbidden());
        }
        let found = self.classrooms.list_by_enrolled_user(&viewer.id).await?;
        resolve_all(found, self.users.as_ref()).await
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════════

async fn resolve_all(
    classrooms: Vec<Classroom>,
    users: &dyn UserRepository,
) -> Result<Vec<ClassroomDetails>, ClassroomError> {
    let mut details = Vec::with_capacity(classrooms.len());
    for classroom in classrooms {
        details.push(ClassroomDetails::resolve(classroom, users).await?);
    }
    Ok(details)
}
