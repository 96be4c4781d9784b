//! HTTP adapter for classroom endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ClassroomListResponse, ClassroomResponse, CreateClassroomRequest, CreateClassroomResponse,
    PersonResponse,
};
pub use handlers::ClassroomHandlers;
pub(crate) use handlers::handle_classroom_error;
pub use routes::{classroom_routes, student_routes};
