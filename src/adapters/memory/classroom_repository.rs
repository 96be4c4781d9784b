//! In-memory classroom repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::classroom::Classroom;
use crate::domain::foundation::{ClassroomId, DomainError, UserId};
use crate::ports::ClassroomRepository;

/// Classroom store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClassroomRepository {
    classrooms: Arc<RwLock<HashMap<ClassroomId, Classroom>>>,
}

impl InMemoryClassroomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn list_where<F>(&self, predicate: F) -> Vec<Classroom>
    where
        F: Fn(&Classroom) -> bool,
    {
        let mut found: Vec<Classroom> = self
            .classrooms
            .read()
            .await
            .values()
            .filter(|c| predicate(c))
            .cloned()
            .collect();
        sort_newest_first(&mut found);
        found
    }
}

#[async_trait]
impl ClassroomRepository for InMemoryClassroomRepository {
    async fn save(&self, classroom: &Classroom) -> Result<(), DomainError> {
        self.classrooms
            .write()
            .await
            .insert(*classroom.id(), classroom.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ClassroomId) -> Result<Option<Classroom>, DomainError> {
        Ok(self.classrooms.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Classroom>, DomainError> {
        Ok(self.list_where(|_| true).await)
    }

    async fn list_by_teacher(&self, teacher_id: &UserId) -> Result<Vec<Classroom>, DomainError> {
        Ok(self.list_where(|c| c.is_owner(teacher_id)).await)
    }

    async fn list_by_enrolled_user(&self, user_id: &UserId) -> Result<Vec<Classroom>, DomainError> {
        Ok(self.list_where(|c| c.is_enrolled(user_id)).await)
    }
}

/// Newest first; ties broken by id so listings are stable.
fn sort_newest_first(classrooms: &mut [Classroom]) {
    classrooms.sort_by(|a, b| {
        b.created_at()
            .cmp(a.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
}
