//! GetCalendarHandler - Query handler for a viewer's calendar.
//!
//! Resolves the classrooms the viewer may see, then expands their weekly
//! recurrences over the requested date range.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::classroom::{Classroom, ClassroomError};
use crate::domain::foundation::{AuthenticatedUser, Role};
use crate::domain::schedule::{expand, group_by_date, CalendarView, DateRange, SessionInstance};
use crate::ports::ClassroomRepository;

/// Longest range a single calendar query may expand.
pub const MAX_CALENDAR_DAYS: i64 = 366;

/// Which days the calendar covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarWindow {
    /// The range a view shows around an anchor day.
    View {
        view: CalendarView,
        anchor: NaiveDate,
    },
    /// An explicit inclusive range. An inverted range yields no sessions.
    Explicit { from: NaiveDate, to: NaiveDate },
}

impl CalendarWindow {
    pub fn range(&self) -> DateRange {
        match *self {
            CalendarWindow::View { view, anchor } => view.range(anchor),
            CalendarWindow::Explicit { from, to } => DateRange::new(from, to),
        }
    }
}

/// Query for a viewer's sessions in a window.
#[derive(Debug, Clone)]
pub struct GetCalendarQuery {
    pub viewer: AuthenticatedUser,
    pub window: CalendarWindow,
}

/// Expanded sessions, flat and grouped by day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarResult {
    pub range: DateRange,
    pub sessions: Vec<SessionInstance>,
    pub days: BTreeMap<NaiveDate, Vec<SessionInstance>>,
}

/// Handler for calendar queries.
pub struct GetCalendarHandler {
    classrooms: Arc<dyn ClassroomRepository>,
}

impl GetCalendarHandler {
    pub fn new(classrooms: Arc<dyn ClassroomRepository>) -> Self {
        Self { classrooms }
    }

    pub async fn handle(&self, query: GetCalendarQuery) -> Result<CalendarResult, ClassroomError> {
        let range = query.window.range();
        if range.is_empty() {
            return Ok(CalendarResult {
                range,
                sessions: Vec::new(),
                days: BTreeMap::new(),
            });
        }
        if range.len_days() > MAX_CALENDAR_DAYS {
            return Err(ClassroomError::validation(
                "to",
                format!("Range may span at most {} days", MAX_CALENDAR_DAYS),
            ));
        }

        let visible = self.visible_classrooms(&query.viewer).await?;

        let schedules: Vec<_> = visible.iter().map(Classroom::schedule).collect();
        let sessions = expand(&schedules, range.start, range.end);
        let days = group_by_date(&sessions);

        tracing::debug!(
            user_id = %query.viewer.id,
            classrooms = schedules.len(),
            sessions = sessions.len(),
            "Calendar expanded"
        );

        Ok(CalendarResult {
            range,
            sessions,
            days,
        })
    }

    /// Admins see everything, teachers their own classrooms, everyone else
    /// the classrooms they are enrolled in.
    async fn visible_classrooms(
        &self,
        viewer: &AuthenticatedUser,
    ) -> Result<Vec<Classroom>, ClassroomError> {
        let found = match viewer.role {
            Role::Admin => self.classrooms.list_all().await?,
            Role::Teacher => self.classrooms.list_by_teacher(&viewer.id).await?,
            Role::Student | Role::Moderator => {
                self.classrooms.list_by_enrolled_user(&viewer.id).await?
            }
        };
        Ok(found)
    }
}
