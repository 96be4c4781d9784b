//! Schedule module - Weekly classroom recurrences and their expansion.
//!
//! A classroom meets on a set of weekdays, inside a daily time window, for
//! as long as its active period lasts. [`expand`] turns those recurrences
//! into the concrete [`SessionInstance`]s a calendar view displays.

mod calendar_view;
mod classroom_schedule;
mod expander;
pub mod wall_clock;
mod weekdays;

pub use calendar_view::{CalendarView, DateRange};
pub use classroom_schedule::{ClassroomSchedule, SessionInstance};
pub use expander::{expand, group_by_date};
pub use weekdays::WeekdaySet;
