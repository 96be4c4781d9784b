//! Application layer - Commands, Queries, and Handlers.
//!
//! Handlers orchestrate domain operations over injected ports. Commands
//! (register, login, create classroom, issue room token) change state or
//! mint credentials; queries (calendar, classroom lookups) only read.

pub mod handlers;

pub use handlers::{
    // Auth handlers
    LoginCommand, LoginHandler, LoginResult, RegisterCommand, RegisterHandler, RegisterResult,
    // Calendar handlers
    CalendarResult, CalendarWindow, GetCalendarHandler, GetCalendarQuery,
    // Classroom handlers
    ClassroomDetails, CreateClassroomCommand, CreateClassroomHandler, CreateClassroomResult,
    GetClassroomHandler, GetClassroomQuery, ListStudentClassroomsHandler,
    ListTeacherClassroomsHandler,
    // Live-room handlers
    IssueRoomTokenCommand, IssueRoomTokenHandler, IssueRoomTokenResult,
};
