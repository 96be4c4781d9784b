//! GetClassroomHandler - Query handler for a single classroom.

use std::sync::Arc;

use super::ClassroomDetails;
use crate::domain::classroom::ClassroomError;
use crate::domain::foundation::{AuthenticatedUser, ClassroomId};
use crate::ports::{ClassroomRepository, UserRepository};

/// Query for one classroom.
#[derive(Debug, Clone)]
pub struct GetClassroomQuery {
    pub viewer: AuthenticatedUser,
    pub classroom_id: ClassroomId,
}

/// Handler for classroom lookups.
///
/// Only the owner, enrolled users and admins may read a classroom.
pub struct GetClassroomHandler {
    classrooms: Arc<dyn ClassroomRepository>,
    users: Arc<dyn UserRepository>,
}

impl GetClassroomHandler {
    pub fn new(classrooms: Arc<dyn ClassroomRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { classrooms, users }
    }

    pub async fn handle(&self, query: GetClassroomQuery) -> Result<ClassroomDetails, ClassroomError> {
        let classroom = self
            .classrooms
            .find_by_id(&query.classroom_id)
            .await?
            .ok_or_else(|| ClassroomError::not_found(query.classroom_id))?;

        if let Err(err) = classroom.authorize(&query.viewer) {
            tracing::warn!(
                classroom_id = %query.classroom_id,
                user_id = %query.viewer.id,
                "Classroom access denied"
            );
            return Err(err);
        }

        ClassroomDetails::resolve(classroom, self.users.as_ref()).await
    }
}
