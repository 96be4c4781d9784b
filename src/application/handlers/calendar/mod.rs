//! Calendar query handlers.

mod get_calendar;

pub use get_calendar::{
    CalendarResult, CalendarWindow, GetCalendarHandler, GetCalendarQuery, MAX_CALENDAR_DAYS,
};
