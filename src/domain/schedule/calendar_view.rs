//! Calendar views and the date ranges they query.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True for an inverted range, which covers no days.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days covered; zero when inverted.
    pub fn len_days(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        (self.end - self.start).num_days() + 1
    }

    /// Iterates every day from start to end inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// The calendar granularity a user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Day,
    #[default]
    Week,
    Month,
}

impl CalendarView {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::Day => "day",
            CalendarView::Week => "week",
            CalendarView::Month => "month",
        }
    }

    /// The days whose sessions the view displays.
    ///
    /// Weeks run Sunday to Saturday. Months run from the first to the last
    /// day of the anchor's month.
    pub fn range(&self, anchor: NaiveDate) -> DateRange {
        match self {
            CalendarView::Day => DateRange::new(anchor, anchor),
            CalendarView::Week => {
                let start = start_of_week(anchor);
                DateRange::new(start, add_days(start, 6))
            }
            CalendarView::Month => DateRange::new(first_of_month(anchor), last_of_month(anchor)),
        }
    }

    /// The days drawn on screen. For months this pads out to whole weeks.
    pub fn grid_range(&self, anchor: NaiveDate) -> DateRange {
        match self {
            CalendarView::Month => {
                let month = self.range(anchor);
                DateRange::new(
                    start_of_week(month.start),
                    add_days(start_of_week(month.end), 6),
                )
            }
            _ => self.range(anchor),
        }
    }

    /// Anchor one step back: a day, a week, or the first of the previous month.
    pub fn previous(&self, anchor: NaiveDate) -> NaiveDate {
        match self {
            CalendarView::Day => sub_days(anchor, 1),
            CalendarView::Week => sub_days(anchor, 7),
            CalendarView::Month => first_of_month(anchor)
                .checked_sub_months(Months::new(1))
                .unwrap_or(anchor),
        }
    }

    /// Anchor one step forward: a day, a week, or the first of the next month.
    pub fn next(&self, anchor: NaiveDate) -> NaiveDate {
        match self {
            CalendarView::Day => add_days(anchor, 1),
            CalendarView::Week => add_days(anchor, 7),
            CalendarView::Month => first_of_month(anchor)
                .checked_add_months(Months::new(1))
                .unwrap_or(anchor),
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarView {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(CalendarView::Day),
            "week" => Ok(CalendarView::Week),
            "month" => Ok(CalendarView::Month),
            other => Err(ValidationError::invalid_format(
                "view",
                format!("expected day, week or month, got '{}'", other),
            )),
        }
    }
}

fn start_of_week(date: NaiveDate) -> NaiveDate {
    sub_days(date, u64::from(date.weekday().num_days_from_sunday()))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

fn add_days(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_add_days(Days::new(n)).unwrap_or(NaiveDate::MAX)
}

fn sub_days(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN)
}
