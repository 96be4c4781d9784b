//! Command and query handlers, grouped by area.

pub mod auth;
pub mod calendar;
pub mod classroom;
pub mod live;

pub use auth::{
    LoginCommand, LoginHandler, LoginResult, RegisterCommand, RegisterHandler, RegisterResult,
    MIN_PASSWORD_LENGTH,
};
pub use calendar::{CalendarResult, CalendarWindow, GetCalendarHandler, GetCalendarQuery};
pub use classroom::{
    ClassroomDetails, CreateClassroomCommand, CreateClassroomHandler, CreateClassroomResult,
    GetClassroomHandler, GetClassroomQuery, ListStudentClassroomsHandler,
    ListTeacherClassroomsHandler,
};
pub use live::{IssueRoomTokenCommand, IssueRoomTokenHandler, IssueRoomTokenResult};
