//! HTTP DTOs for classroom endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::classroom::{ClassroomDetails, CreateClassroomResult};
use crate::domain::classroom::MeetingPattern;
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::schedule::{wall_clock, WeekdaySet};
use crate::domain::user::UserAccount;

const DATE_FORMAT: &str = "%Y-%m-%d";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a classroom.
///
/// Dates are `YYYY-MM-DD`, times `HH:MM`; blank strings count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassroomRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    /// `[Sun, Mon, Tue, Wed, Thu, Fri, Sat]`
    #[serde(default)]
    pub days: Option<Vec<bool>>,
    #[serde(default)]
    pub student_emails: Vec<String>,
}

impl CreateClassroomRequest {
    /// Parses the recurrence fields. Ordering is checked by the aggregate.
    pub fn pattern(&self) -> Result<MeetingPattern, ValidationError> {
        Ok(MeetingPattern {
            active_from: parse_date("startDate", self.start_date.as_deref())?,
            active_until: parse_date("endDate", self.end_date.as_deref())?,
            daily_start: present(self.start_time.as_deref())
                .map(|raw| wall_clock::parse("startTime", raw))
                .transpose()?,
            daily_end: present(self.end_time.as_deref())
                .map(|raw| wall_clock::parse("endTime", raw))
                .transpose()?,
            weekdays: self.days.as_deref().map(WeekdaySet::from_flags),
        })
    }
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_date(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    present(raw)
        .map(|s| {
            NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| {
                ValidationError::invalid_format(field, format!("expected YYYY-MM-DD, got '{}'", s))
            })
        })
        .transpose()
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// An account referenced by a classroom.
#[derive(Debug, Clone, Serialize)]
pub struct PersonResponse {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<&UserAccount> for PersonResponse {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email.to_string(),
            name: account.display_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomResponse {
    pub id: String,
    pub title: String,
    pub teacher_id: String,
    pub teacher: Option<PersonResponse>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub days: [bool; 7],
    pub live_room: String,
    pub students: Vec<PersonResponse>,
    pub created_at: Timestamp,
}

impl From<&ClassroomDetails> for ClassroomResponse {
    fn from(details: &ClassroomDetails) -> Self {
        let classroom = &details.classroom;
        let pattern = classroom.pattern();
        Self {
            id: classroom.id().to_string(),
            title: classroom.title().to_string(),
            teacher_id: classroom.teacher_id().to_string(),
            teacher: details.teacher.as_ref().map(PersonResponse::from),
            start_date: pattern.active_from,
            end_date: pattern.active_until,
            start_time: pattern.daily_start.as_ref().map(wall_clock::format),
            end_time: pattern.daily_end.as_ref().map(wall_clock::format),
            days: pattern.weekdays.unwrap_or_default().to_flags(),
            live_room: classroom.live_room().to_string(),
            students: details.students.iter().map(PersonResponse::from).collect(),
            created_at: *classroom.created_at(),
        }
    }
}

/// Response to classroom creation: the classroom plus emails that matched no account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassroomResponse {
    #[serde(flatten)]
    pub classroom: ClassroomResponse,
    pub skipped_emails: Vec<String>,
}

impl From<CreateClassroomResult> for CreateClassroomResponse {
    fn from(result: CreateClassroomResult) -> Self {
        Self {
            classroom: ClassroomResponse::from(&result.details),
            skipped_emails: result.skipped_emails,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassroomListResponse {
    pub classrooms: Vec<ClassroomResponse>,
}

impl From<Vec<ClassroomDetails>> for ClassroomListResponse {
    fn from(list: Vec<ClassroomDetails>) -> Self {
        Self {
            classrooms: list.iter().map(ClassroomResponse::from).collect(),
        }
    }
}
