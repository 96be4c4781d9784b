//! Classroom domain module.
//!
//! Classrooms are created by teachers and carry the weekly meeting pattern
//! the calendar expands. Enrollment decides who else may open them.

mod aggregate;
mod errors;
mod pattern;
mod room_grant;

pub use aggregate::{generate_live_room, Classroom, DEFAULT_TITLE, MAX_TITLE_LENGTH};
pub use errors::ClassroomError;
pub use pattern::MeetingPattern;
pub use room_grant::RoomGrant;
