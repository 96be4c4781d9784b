//! HTTP handlers for classroom endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::{RequireAuth, RequireStudent, RequireTeacher};
use crate::application::handlers::classroom::{
    CreateClassroomCommand, CreateClassroomHandler, GetClassroomHandler, GetClassroomQuery,
    ListStudentClassroomsHandler, ListTeacherClassroomsHandler,
};
use crate::domain::classroom::ClassroomError;
use crate::domain::foundation::ClassroomId;

use super::dto::{
    ClassroomListResponse, ClassroomResponse, CreateClassroomRequest, CreateClassroomResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ClassroomHandlers {
    create_handler: Arc<CreateClassroomHandler>,
    get_handler: Arc<GetClassroomHandler>,
    list_teacher_handler: Arc<ListTeacherClassroomsHandler>,
    list_student_handler: Arc<ListStudentClassroomsHandler>,
}

impl ClassroomHandlers {
    pub fn new(
        create_handler: Arc<CreateClassroomHandler>,
        get_handler: Arc<GetClassroomHandler>,
        list_teacher_handler: Arc<ListTeacherClassroomsHandler>,
        list_student_handler: Arc<ListStudentClassroomsHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_teacher_handler,
            list_student_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/classrooms - Create a classroom
pub async fn create_classroom(
    State(handlers): State<ClassroomHandlers>,
    RequireTeacher(user): RequireTeacher,
    Json(req): Json<CreateClassroomRequest>,
) -> Response {
    let pattern = match req.pattern() {
        Ok(pattern) => pattern,
        Err(e) => return handle_classroom_error(e.into()),
    };

    let cmd = CreateClassroomCommand {
        teacher: user,
        title: req.title,
        pattern,
        student_emails: req.student_emails,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => {
            (StatusCode::CREATED, Json(CreateClassroomResponse::from(result))).into_response()
        }
        Err(e) => handle_classroom_error(e),
    }
}

/// GET /api/classrooms - Classrooms the teacher owns (admins: all)
pub async fn list_teacher_classrooms(
    State(handlers): State<ClassroomHandlers>,
    RequireTeacher(user): RequireTeacher,
) -> Response {
    match handlers.list_teacher_handler.handle(&user).await {
        Ok(list) => (StatusCode::OK, Json(ClassroomListResponse::from(list))).into_response(),
        Err(e) => handle_classroom_error(e),
    }
}

/// GET /api/students/classrooms - Classrooms the caller is enrolled in
pub async fn list_student_classrooms(
    State(handlers): State<ClassroomHandlers>,
    RequireStudent(user): RequireStudent,
) -> Response {
    match handlers.list_student_handler.handle(&user).await {
        Ok(list) => (StatusCode::OK, Json(ClassroomListResponse::from(list))).into_response(),
        Err(e) => handle_classroom_error(e),
    }
}

/// GET /api/classrooms/:id - Classroom details
pub async fn get_classroom(
    State(handlers): State<ClassroomHandlers>,
    RequireAuth(user): RequireAuth,
    Path(classroom_id): Path<String>,
) -> Response {
    let classroom_id = match classroom_id.parse::<ClassroomId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid classroom ID")),
            )
                .into_response()
        }
    };

    let query = GetClassroomQuery {
        viewer: user,
        classroom_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(details) => (StatusCode::OK, Json(ClassroomResponse::from(&details))).into_response(),
        Err(e) => handle_classroom_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

pub(crate) fn handle_classroom_error(error: ClassroomError) -> Response {
    match error {
        ClassroomError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Classroom", &id.to_string())),
        )
            .into_response(),
        ClassroomError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden("Access denied")),
        )
            .into_response(),
        ClassroomError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        ClassroomError::Infrastructure(msg) => {
            tracing::error!("Classroom storage failure: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}
