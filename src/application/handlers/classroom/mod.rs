//! Classroom command and query handlers.

mod create_classroom;
mod details;
mod get_classroom;
mod list_classrooms;

pub use create_classroom::{CreateClassroomCommand, CreateClassroomHandler, CreateClassroomResult};
pub use details::ClassroomDetails;
pub use get_classroom::{GetClassroomHandler, GetClassroomQuery};
pub use list_classrooms::{ListStudentClassroomsHandler, ListTeacherClassroomsHandler};
