//! Classroom aggregate entity.
//!
//! A classroom is owned by one teacher, meets on a weekly pattern, has one
//! live room, and holds the list of enrolled users.

use uuid::Uuid;

use super::{ClassroomError, MeetingPattern};
use crate::domain::foundation::{AuthenticatedUser, ClassroomId, Timestamp, UserId};
use crate::domain::schedule::ClassroomSchedule;

/// Title used when a classroom is created without one.
pub const DEFAULT_TITLE: &str = "New Classroom";

/// Maximum length for classroom title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Classroom aggregate.
///
/// # Invariants
///
/// - `title` is 1-200 characters
/// - the meeting pattern passes [`MeetingPattern::validate`]
/// - `enrolled` contains no duplicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classroom {
    id: ClassroomId,
    teacher_id: UserId,
    title: String,
    pattern: MeetingPattern,
    live_room: String,
    enrolled: Vec<UserId>,
    created_at: Timestamp,
}

impl Classroom {
    /// Create a new classroom with a freshly generated live room.
    ///
    /// A blank title becomes [`DEFAULT_TITLE`].
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is too long or the pattern is inverted
    pub fn new(
        id: ClassroomId,
        teacher_id: UserId,
        title: &str,
        pattern: MeetingPattern,
    ) -> Result<Self, ClassroomError> {
        let title = match title.trim() {
            "" => DEFAULT_TITLE.to_string(),
            trimmed => trimmed.to_string(),
        };
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ClassroomError::validation(
                "title",
                format!("must be at most {} characters", MAX_TITLE_LENGTH),
            ));
        }
        pattern.validate()?;

        Ok(Self {
            id,
            teacher_id,
            title,
            pattern,
            live_room: generate_live_room(),
            enrolled: Vec::new(),
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a classroom from persistence (no validation).
    pub fn reconstitute(
        id: ClassroomId,
        teacher_id: UserId,
        title: String,
        pattern: MeetingPattern,
        live_room: String,
        enrolled: Vec<UserId>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            teacher_id,
            title,
            pattern,
            live_room,
            enrolled,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ClassroomId {
        &self.id
    }

    /// Returns the owning teacher's user ID.
    pub fn teacher_id(&self) -> &UserId {
        &self.teacher_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pattern(&self) -> &MeetingPattern {
        &self.pattern
    }

    /// Returns the name of the classroom's live video room.
    pub fn live_room(&self) -> &str {
        &self.live_room
    }

    /// Returns the enrolled user IDs in enrollment order.
    pub fn enrolled(&self) -> &[UserId] {
        &self.enrolled
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Projects the recurrence the calendar expander consumes.
    pub fn schedule(&self) -> ClassroomSchedule {
        ClassroomSchedule {
            id: self.id,
            title: self.title.clone(),
            active_from: self.pattern.active_from,
            active_until: self.pattern.active_until,
            daily_start: self.pattern.daily_start,
            daily_end: self.pattern.daily_end,
            active_weekdays: self.pattern.weekdays,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.teacher_id == user_id
    }

    pub fn is_enrolled(&self, user_id: &UserId) -> bool {
        self.enrolled.contains(user_id)
    }

    /// Owner, admins and enrolled users may open the classroom.
    pub fn is_accessible_by(&self, user: &AuthenticatedUser) -> bool {
        user.role.is_admin() || self.is_owner(&user.id) || self.is_enrolled(&user.id)
    }

    /// Validates that the user can open this classroom.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if the user is not the owner, an admin, or enrolled
    pub fn authorize(&self, user: &AuthenticatedUser) -> Result<(), ClassroomError> {
        if self.is_accessible_by(user) {
            Ok(())
        } else {
            Err(ClassroomError::forbidden())
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Enroll a user. Returns false if they were already enrolled.
    pub fn enroll(&mut self, user_id: UserId) -> bool {
        if self.is_enrolled(&user_id) {
            return false;
        }
        self.enrolled.push(user_id);
        true
    }
}

/// Generates a live room name of the form `room-xxxxxx`.
pub fn generate_live_room() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("room-{}", &suffix[..6])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Role;
    use crate::domain::schedule::WeekdaySet;
    use chrono::{NaiveDate, NaiveTime};

    fn full_pattern() -> MeetingPattern {
        MeetingPattern {
            active_from: NaiveDate::from_ymd_opt(2024, 1, 1),
            active_until: NaiveDate::from_ymd_opt(2024, 12, 31),
            daily_start: NaiveTime::from_hms_opt(12, 0, 0),
            daily_end: NaiveTime::from_hms_opt(13, 0, 0),
            weekdays: Some(WeekdaySet::WORKWEEK),
        }
    }

    fn classroom(teacher: UserId) -> Classroom {
        Classroom::new(ClassroomId::new(), teacher, "English Kids", full_pattern()).unwrap()
    }

    #[test]
    fn blank_title_defaults() {
        let c = Classroom::new(ClassroomId::new(), UserId::new(), "   ", MeetingPattern::default())
            .unwrap();
        assert_eq!(c.title(), DEFAULT_TITLE);
    }

    #[test]
    fn overlong_title_is_rejected() {
        let title = "x".repeat(MAX_TITLE_LENGTH + 1);
        let result = Classroom::new(ClassroomId::new(), UserId::new(), &title, full_pattern());
        assert!(matches!(result, Err(ClassroomError::ValidationFailed { .. })));
    }

    #[test]
    fn inverted_pattern_is_rejected() {
        let pattern = MeetingPattern {
            daily_start: NaiveTime::from_hms_opt(13, 0, 0),
            daily_end: NaiveTime::from_hms_opt(12, 0, 0),
            ..full_pattern()
        };
        let result = Classroom::new(ClassroomId::new(), UserId::new(), "Late", pattern);
        assert!(matches!(
            result,
            Err(ClassroomError::ValidationFailed { ref field, .. }) if field == "endTime"
        ));
    }

    #[test]
    fn live_room_has_expected_shape() {
        let room = classroom(UserId::new()).live_room().to_string();
        assert!(room.starts_with("room-"));
        assert_eq!(room.len(), 11);
    }

    #[test]
    fn schedule_projection_copies_pattern() {
        let c = classroom(UserId::new());
        let schedule = c.schedule();
        assert_eq!(schedule.id, *c.id());
        assert_eq!(schedule.title, "English Kids");
        assert!(schedule.is_complete());
    }

    #[test]
    fn enroll_is_idempotent() {
        let mut c = classroom(UserId::new());
        let student = UserId::new();
        assert!(c.enroll(student));
        assert!(!c.enroll(student));
        assert_eq!(c.enrolled(), &[student]);
    }

    #[test]
    fn access_rules() {
        let teacher = UserId::new();
        let mut c = classroom(teacher);
        let student = UserId::new();
        c.enroll(student);

        let owner = AuthenticatedUser::new(teacher, "t@example.com", Role::Teacher);
        let enrolled = AuthenticatedUser::new(student, "s@example.com", Role::Student);
        let admin = AuthenticatedUser::new(UserId::new(), "a@example.com", Role::Admin);
        let stranger = AuthenticatedUser::new(UserId::new(), "x@example.com", Role::Teacher);

        assert!(c.authorize(&owner).is_ok());
        assert!(c.authorize(&enrolled).is_ok());
        assert!(c.authorize(&admin).is_ok());
        assert_eq!(c.authorize(&stranger), Err(ClassroomError::Forbidden));
    }
}
