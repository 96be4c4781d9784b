//! HTTP routes for classroom endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_classroom, get_classroom, list_student_classrooms, list_teacher_classrooms,
    ClassroomHandlers,
};

/// Creates the classroom router, mounted at `/api/classrooms`.
pub fn classroom_routes(handlers: ClassroomHandlers) -> Router {
    Router::new()
        .route("/", get(list_teacher_classrooms).post(create_classroom))
        .route("/:id", get(get_classroom))
        .with_state(handlers)
}

/// Creates the student router, mounted at `/api/students`.
pub fn student_routes(handlers: ClassroomHandlers) -> Router {
    Router::new()
        .route("/classrooms", get(list_student_classrooms))
        .with_state(handlers)
}
