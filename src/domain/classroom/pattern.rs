//! Weekly meeting pattern of a classroom.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::foundation::ValidationError;
use crate::domain::schedule::WeekdaySet;

/// When a classroom meets. Every part is optional; a classroom with a partial
/// pattern exists but never shows up on a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeetingPattern {
    pub active_from: Option<NaiveDate>,
    pub active_until: Option<NaiveDate>,
    pub daily_start: Option<NaiveTime>,
    pub daily_end: Option<NaiveTime>,
    pub weekdays: Option<WeekdaySet>,
}

impl MeetingPattern {
    /// Checks the bounds that are present.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` on `endDate` if the period ends before it starts
    /// - `InvalidFormat` on `endTime` if the daily window is empty or inverted
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let (Some(from), Some(until)) = (self.active_from, self.active_until) {
            if from > until {
                return Err(ValidationError::invalid_format(
                    "endDate",
                    format!("end date {} is before start date {}", until, from),
                ));
            }
        }
        if let (Some(start), Some(end)) = (self.daily_start, self.daily_end) {
            if start >= end {
                return Err(ValidationError::invalid_format(
                    "endTime",
                    format!(
                        "end time {} must be after start time {}",
                        end.format("%H:%M"),
                        start.format("%H:%M")
                    ),
                ));
            }
        }
        Ok(())
    }
}
