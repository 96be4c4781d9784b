//! Recurrence input and expansion output types.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::wall_clock::hhmm;
use super::WeekdaySet;
use crate::domain::foundation::ClassroomId;

/// A classroom's weekly recurrence as read from the schedule source.
///
/// Every recurrence field is optional because stored records may be partial.
/// A record missing any of them contributes no session instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomSchedule {
    pub id: ClassroomId,
    pub title: String,

    /// First day (inclusive) on which the weekly pattern applies.
    #[serde(default)]
    pub active_from: Option<NaiveDate>,

    /// Last day (inclusive) on which the weekly pattern applies.
    #[serde(default)]
    pub active_until: Option<NaiveDate>,

    #[serde(default, with = "hhmm::option")]
    pub daily_start: Option<NaiveTime>,

    #[serde(default, with = "hhmm::option")]
    pub daily_end: Option<NaiveTime>,

    #[serde(default)]
    pub active_weekdays: Option<WeekdaySet>,
}

/// A schedule with every recurrence field present.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Recurrence {
    pub active_from: NaiveDate,
    pub active_until: NaiveDate,
    pub daily_start: NaiveTime,
    pub daily_end: NaiveTime,
    pub weekdays: WeekdaySet,
}

impl ClassroomSchedule {
    /// Creates a schedule with no recurrence; use the `with_*` builders to fill it.
    pub fn new(id: ClassroomId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            active_from: None,
            active_until: None,
            daily_start: None,
            daily_end: None,
            active_weekdays: None,
        }
    }

    pub fn with_active_period(mut self, from: NaiveDate, until: NaiveDate) -> Self {
        self.active_from = Some(from);
        self.active_until = Some(until);
        self
    }

    pub fn with_daily_window(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.daily_start = Some(start);
        self.daily_end = Some(end);
        self
    }

    pub fn with_weekdays(mut self, weekdays: WeekdaySet) -> Self {
        self.active_weekdays = Some(weekdays);
        self
    }

    /// Returns the complete recurrence, or `None` if any field is missing.
    pub(crate) fn recurrence(&self) -> Option<Recurrence> {
        Some(Recurrence {
            active_from: self.active_from?,
            active_until: self.active_until?,
            daily_start: self.daily_start?,
            daily_end: self.daily_end?,
            weekdays: self.active_weekdays?,
        })
    }

    /// Returns true if the record can produce instances at all.
    pub fn is_complete(&self) -> bool {
        self.recurrence().is_some()
    }
}

/// One concrete calendar-day occurrence of a classroom.
///
/// Built fresh on every expansion; the title is a copy, not a live link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInstance {
    pub classroom_id: ClassroomId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}
