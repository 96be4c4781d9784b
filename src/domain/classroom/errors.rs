//! Classroom-specific error types.

use crate::domain::foundation::{ClassroomId, DomainError, ErrorCode, ValidationError};

/// Classroom-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassroomError {
    /// Classroom was not found.
    NotFound(ClassroomId),
    /// Caller is neither the owner, an admin, nor enrolled.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ClassroomError {
    pub fn not_found(id: ClassroomId) -> Self {
        ClassroomError::NotFound(id)
    }
    pub fn forbidden() -> Self {
        ClassroomError::Forbidden
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ClassroomError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ClassroomError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ClassroomError::NotFound(_) => ErrorCode::ClassroomNotFound,
            ClassroomError::Forbidden => ErrorCode::Forbidden,
            ClassroomError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ClassroomError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ClassroomError::NotFound(id) => format!("Classroom not found: {}", id),
            ClassroomError::Forbidden => "Access denied".to_string(),
            ClassroomError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ClassroomError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ClassroomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ClassroomError {}

impl From<ValidationError> for ClassroomError {
    fn from(err: ValidationError) -> Self {
        ClassroomError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ClassroomError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => ClassroomError::Forbidden,
            ErrorCode::ValidationFailed => ClassroomError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ClassroomError::Infrastructure(err.to_string()),
        }
    }
}
