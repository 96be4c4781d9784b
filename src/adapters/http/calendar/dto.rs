//! HTTP DTOs for the calendar endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::calendar::CalendarResult;
use crate::domain::schedule::{CalendarView, SessionInstance};

/// Query string for `GET /api/calendar`.
///
/// `from` + `to` select an explicit range and win over `view` + `anchor`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarQuery {
    #[serde(default)]
    pub view: Option<String>,
    #[serde(default)]
    pub anchor: Option<NaiveDate>,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

/// Sessions on one day.
#[derive(Debug, Clone, Serialize)]
pub struct DayResponse {
    pub date: NaiveDate,
    pub sessions: Vec<SessionInstance>,
}

/// Navigation anchors for the view the range was computed from.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationResponse {
    pub view: CalendarView,
    pub anchor: NaiveDate,
    pub previous: NaiveDate,
    pub next: NaiveDate,
    /// Whole weeks a month grid draws; equal to the range for day and week.
    pub grid_start: NaiveDate,
    pub grid_end: NaiveDate,
}

impl NavigationResponse {
    pub fn new(view: CalendarView, anchor: NaiveDate) -> Self {
        let grid = view.grid_range(anchor);
        Self {
            view,
            anchor,
            previous: view.previous(anchor),
            next: view.next(anchor),
            grid_start: grid.start,
            grid_end: grid.end,
        }
    }
}

/// Calendar body. `days` lists every day of the range in order, including
/// days without sessions.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarResponse {
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub sessions: Vec<SessionInstance>,
    pub days: Vec<DayResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationResponse>,
}

impl CalendarResponse {
    pub fn new(result: CalendarResult, navigation: Option<NavigationResponse>) -> Self {
        let mut grouped = result.days;
        let days = result
            .range
            .days()
            .map(|date| DayResponse {
                date,
                sessions: grouped.remove(&date).unwrap_or_default(),
            })
            .collect();

        Self {
            range_start: result.range.start,
            range_end: result.range.end,
            sessions: result.sessions,
            days,
            navigation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ClassroomId;
    use crate::domain::schedule::{group_by_date, DateRange};
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_day_of_range_is_listed() {
        let session = SessionInstance {
            classroom_id: ClassroomId::new(),
            title: "Algebra".to_string(),
            date: date(2024, 6, 4),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        };
        let sessions = vec![session];
        let result = CalendarResult {
            range: DateRange::new(date(2024, 6, 2), date(2024, 6, 8)),
            days: group_by_date(&sessions),
            sessions,
        };

        let response = CalendarResponse::new(result, None);

        assert_eq!(response.days.len(), 7);
        assert_eq!(response.days[0].date, date(2024, 6, 2));
        assert!(response.days[0].sessions.is_empty());
        assert_eq!(response.days[2].sessions.len(), 1);
    }

    #[test]
    fn month_navigation_carries_grid() {
        let nav = NavigationResponse::new(CalendarView::Month, date(2024, 6, 15));
        assert_eq!(nav.grid_start, date(2024, 5, 26));
        assert_eq!(nav.grid_end, date(2024, 7, 6));
        assert_eq!(nav.previous, date(2024, 5, 1));
        assert_eq!(nav.next, date(2024, 7, 1));
    }
}
