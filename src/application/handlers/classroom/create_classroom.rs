//! CreateClassroomHandler - Command handler for creating classrooms.

use std::sync::Arc;

use super::ClassroomDetails;
use crate::domain::classroom::{Classroom, ClassroomError, MeetingPattern};
use crate::domain::foundation::{AuthenticatedUser, ClassroomId, Role};
use crate::domain::user::{Email, UserAccount};
use crate::ports::{ClassroomRepository, UserRepository};

/// Command to create a classroom owned by the caller.
#[derive(Debug, Clone)]
pub struct CreateClassroomCommand {
    pub teacher: AuthenticatedUser,
    pub title: String,
    pub pattern: MeetingPattern,
    pub student_emails: Vec<String>,
}

/// Result of classroom creation.
#[derive(Debug, Clone)]
pub struct CreateClassroomResult {
    /// The new classroom with its owner and enrolled accounts.
    pub details: ClassroomDetails,
    /// Emails with no matching account, or not parseable as emails.
    pub skipped_emails: Vec<String>,
}

/// Handler for creating classrooms.
pub struct CreateClassroomHandler {
    classrooms: Arc<dyn ClassroomRepository>,
    users: Arc<dyn UserRepository>,
}

impl CreateClassroomHandler {
    pub fn new(classrooms: Arc<dyn ClassroomRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { classrooms, users }
    }

    pub async fn handle(
        &self,
        cmd: CreateClassroomCommand,
    ) -> Result<CreateClassroomResult, ClassroomError> {
        if !cmd.teacher.has_any_role(&[Role::Teacher, Role::Admin]) {
            return Err(ClassroomError::forbidden());
        }

        // 1. Build the aggregate; this validates title and pattern
        let mut classroom =
            Classroom::new(ClassroomId::new(), cmd.teacher.id, &cmd.title, cmd.pattern)?;

        // 2. Resolve and enroll students
        let mut students = Vec::new();
        let mut skipped_emails = Vec::new();
        for raw in &cmd.student_emails {
            if raw.trim().is_empty() {
                continue;
            }
            match self.resolve_student(raw).await? {
                Some(account) => {
                    if classroom.enroll(account.id) {
                        students.push(account);
                    }
                }
                None => skipped_emails.push(raw.trim().to_string()),
            }
        }

        // 3. Persist classroom and enrollments together
        self.classrooms.save(&classroom).await?;
        let teacher = self.users.find_by_id(&cmd.teacher.id).await?;

        tracing::info!(
            classroom_id = %classroom.id(),
            teacher_id = %cmd.teacher.id,
            enrolled = students.len(),
            skipped = skipped_emails.len(),
            "Classroom created"
        );

        Ok(CreateClassroomResult {
            details: ClassroomDetails {
                classroom,
                teacher,
                students,
            },
            skipped_emails,
        })
    }

    async fn resolve_student(&self, raw: &str) -> Result<Option<UserAccount>, ClassroomError> {
        let Ok(email) = Email::parse(raw) else {
            return Ok(None);
        };
        Ok(self.users.find_by_email(&email).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryClassroomRepository, InMemoryUserRepository};
    use crate::domain::classroom::DEFAULT_TITLE;
    use crate::domain::foundation::{DomainError, ErrorCode, UserId};
    use async_trait::async_trait;
    use chrono::NaiveTime;
    use std::sync::Mutex;

    /// Records every classroom handed to `save`, then delegates.
    #[derive(Default)]
    struct RecordingClassroomRepository {
        inner: InMemoryClassroomRepository,
        saved: Mutex<Vec<Classroom>>,
    }

    #[async_trait]
    impl ClassroomRepository for RecordingClassroomRepository {
        async fn save(&self, classroom: &Classroom) -> Result<(), DomainError> {
            self.saved.lock().unwrap().push(classroom.clone());
            self.inner.save(classroom).await
        }
        async fn find_by_id(&self, id: &ClassroomId) -> Result<Option<Classroom>, DomainError> {
            self.inner.find_by_id(id).await
        }
        async fn list_all(&self) -> Result<Vec<Classroom>, DomainError> {
            self.inner.list_all().await
        }
        async fn list_by_teacher(&self, teacher_id: &UserId) -> Result<Vec<Classroom>, DomainError> {
            self.inner.list_by_teacher(teacher_id).await
        }
        async fn list_by_enrolled_user(
            &self,
            user_id: &UserId,
        ) -> Result<Vec<Classroom>, DomainError> {
            self.inner.list_by_enrolled_user(user_id).await
        }
    }

    struct Fixture {
        handler: CreateClassroomHandler,
        classrooms: Arc<InMemoryClassroomRepository>,
        student: UserAccount,
    }

    async fn fixture() -> Fixture {
        let classrooms = Arc::new(InMemoryClassroomRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let student = UserAccount::new(
            Email::parse("sam@example.com").unwrap(),
            "plain:pw1234".to_string(),
            Role::Student,
        );
        users.create(&student).await.unwrap();

        Fixture {
            handler: CreateClassroomHandler::new(classrooms.clone(), users),
            classrooms,
            student,
        }
    }

    fn teacher() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(), "t@example.com", Role::Teacher)
    }

    fn cmd(teacher: AuthenticatedUser, title: &str, emails: &[&str]) -> CreateClassroomCommand {
        CreateClassroomCommand {
            teacher,
            title: title.to_string(),
            pattern: MeetingPattern::default(),
            student_emails: emails.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn creates_and_persists_classroom() {
        let f = fixture().await;
        let teacher = teacher();

        let result = f
            .handler
            .handle(cmd(teacher.clone(), "French for Adults", &[]))
            .await
            .unwrap();

        assert_eq!(result.details.classroom.title(), "French for Adults");
        assert_eq!(result.details.classroom.teacher_id(), &teacher.id);
        assert!(result.details.classroom.live_room().starts_with("room-"));
        let stored = f.classrooms.find_by_id(result.details.classroom.id()).await.unwrap();
        assert_eq!(stored, Some(result.details.classroom));
    }

    #[tokio::test]
    async fn blank_title_gets_default() {
        let f = fixture().await;
        let result = f.handler.handle(cmd(teacher(), "   ", &[])).await.unwrap();
        assert_eq!(result.details.classroom.title(), DEFAULT_TITLE);
    }

    #[tokio::test]
    async fn enrolls_known_students_and_skips_unknown() {
        let f = fixture().await;

        let result = f
            .handler
            .handle(cmd(
                teacher(),
                "Algebra",
                &["SAM@example.com", "ghost@example.com", "not-an-email", ""],
            ))
            .await
            .unwrap();

        assert_eq!(result.details.students.len(), 1);
        assert_eq!(result.details.students[0].id, f.student.id);
        assert!(result.details.classroom.is_enrolled(&f.student.id));
        assert_eq!(result.skipped_emails, vec!["ghost@example.com", "not-an-email"]);
        let stored = f
            .classrooms
            .find_by_id(result.details.classroom.id())
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_enrolled(&f.student.id));
    }

    #[tokio::test]
    async fn duplicate_student_emails_enroll_once() {
        let f = fixture().await;

        let result = f
            .handler
            .handle(cmd(teacher(), "Algebra", &["sam@example.com", "sam@example.com"]))
            .await
            .unwrap();

        assert_eq!(result.details.students.len(), 1);
        assert_eq!(result.details.classroom.enrolled().len(), 1);
    }

    #[tokio::test]
    async fn inverted_daily_window_is_rejected() {
        let f = fixture().await;
        let mut command = cmd(teacher(), "Algebra", &[]);
        command.pattern.daily_start = NaiveTime::from_hms_opt(14, 0, 0);
        command.pattern.daily_end = NaiveTime::from_hms_opt(13, 0, 0);

        let err = f.handler.handle(command).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(f.classrooms.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn students_cannot_create_classrooms() {
        let f = fixture().await;
        let student = AuthenticatedUser::new(UserId::new(), "s@example.com", Role::Student);

        let err = f.handler.handle(cmd(student, "Algebra", &[])).await.unwrap_err();

        assert_eq!(err, ClassroomError::forbidden());
    }

    #[tokio::test]
    async fn enrollments_are_persisted_in_the_single_save() {
        let f = fixture().await;
        let users = Arc::new(InMemoryUserRepository::new());
        users.create(&f.student).await.unwrap();
        let recording = Arc::new(RecordingClassroomRepository::default());
        let handler = CreateClassroomHandler::new(recording.clone(), users);

        handler
            .handle(cmd(teacher(), "Algebra", &["sam@example.com"]))
            .await
            .unwrap();

        let saved = recording.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].is_enrolled(&f.student.id));
    }
}
