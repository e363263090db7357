//! Error types for the domain layer.

use serde::Serialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at least {min} characters, got {actual}")]
    TooShort {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Field '{field}' must be at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' is not accepted here")]
    UnknownField { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a too-short validation error.
    pub fn too_short(field: impl Into<String>, min: usize, actual: usize) -> Self {
        ValidationError::TooShort {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates a too-long validation error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown field validation error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        ValidationError::UnknownField { field: field.into() }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::UnknownField { field } => field,
        }
    }

    /// Field-level detail for API responses.
    pub fn to_issue(&self) -> FieldIssue {
        FieldIssue {
            field: self.field().to_string(),
            message: self.to_string(),
        }
    }
}

/// One field-level validation problem, as reported to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    NotFound,
    JournalEntryNotFound,
    UserNotFound,
    HabitNotFound,
    MeditationNotFound,
    ThoughtPatternNotFound,
    SessionNotFound,

    // Conflict errors
    Conflict,
    InvalidStateTransition,
    SessionBusy,

    // AI errors
    ClassificationFailed,

    // Infrastructure errors
    StorageError,
    CapacityExceeded,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::JournalEntryNotFound => "JOURNAL_ENTRY_NOT_FOUND",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::HabitNotFound => "HABIT_NOT_FOUND",
            ErrorCode::MeditationNotFound => "MEDITATION_NOT_FOUND",
            ErrorCode::ThoughtPatternNotFound => "THOUGHT_PATTERN_NOT_FOUND",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::SessionBusy => "SESSION_BUSY",
            ErrorCode::ClassificationFailed => "CLASSIFICATION_FAILED",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::CapacityExceeded => "CAPACITY_EXCEEDED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a storage failure.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("situation");
        assert_eq!(format!("{}", err), "Field 'situation' cannot be empty");
    }

    #[test]
    fn validation_error_too_short_displays_correctly() {
        let err = ValidationError::too_short("thought", 5, 2);
        assert_eq!(
            format!("{}", err),
            "Field 'thought' must be at least 5 characters, got 2"
        );
    }

    #[test]
    fn validation_error_exposes_field_name() {
        let err = ValidationError::out_of_range("intensity", 1, 10, 11);
        assert_eq!(err.field(), "intensity");
        let issue = err.to_issue();
        assert_eq!(issue.field, "intensity");
        assert!(issue.message.contains("between 1 and 10"));
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::JournalEntryNotFound, "Entry not found");
        assert_eq!(format!("{}", err), "[JOURNAL_ENTRY_NOT_FOUND] Entry not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::storage("write failed").with_detail("collection", "journal");
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.details.get("collection"), Some(&"journal".to_string()));
    }
}
