//! Errors for the collateral record collections.

use crate::domain::foundation::{
    DomainError, ErrorCode, FieldIssue, HabitId, MeditationId, ThoughtPatternId, UserId,
    ValidationError,
};

/// Errors raised by user, mood, habit, meditation and thought-pattern ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    UserNotFound(UserId),
    HabitNotFound(HabitId),
    MeditationNotFound(MeditationId),
    ThoughtPatternNotFound(ThoughtPatternId),
    /// A user with that username already exists.
    UsernameTaken(String),
    ValidationFailed(Vec<ValidationError>),
    Storage(String),
}

impl RecordError {
    pub fn validation(issues: Vec<ValidationError>) -> Self {
        RecordError::ValidationFailed(issues)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        RecordError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RecordError::UserNotFound(_) => ErrorCode::UserNotFound,
            RecordError::HabitNotFound(_) => ErrorCode::HabitNotFound,
            RecordError::MeditationNotFound(_) => ErrorCode::MeditationNotFound,
            RecordError::ThoughtPatternNotFound(_) => ErrorCode::ThoughtPatternNotFound,
            RecordError::UsernameTaken(_) => ErrorCode::Conflict,
            RecordError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            RecordError::Storage(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RecordError::UserNotFound(id) => format!("User not found: {}", id),
            RecordError::HabitNotFound(id) => format!("Habit not found: {}", id),
            RecordError::MeditationNotFound(id) => format!("Meditation not found: {}", id),
            RecordError::ThoughtPatternNotFound(id) => format!("Thought pattern not found: {}", id),
            RecordError::UsernameTaken(name) => format!("Username already taken: {}", name),
            RecordError::ValidationFailed(issues) => {
                let fields: Vec<&str> = issues.iter().map(|e| e.field()).collect();
                format!("Validation failed for: {}", fields.join(", "))
            }
            RecordError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }

    pub fn issues(&self) -> Vec<FieldIssue> {
        match self {
            RecordError::ValidationFailed(issues) => issues.iter().map(|e| e.to_issue()).collect(),
            _ => Vec::new(),
        }
    }
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RecordError {}

impl From<DomainError> for RecordError {
    fn from(err: DomainError) -> Self {
        RecordError::Storage(err.to_string())
    }
}

impl From<ValidationError> for RecordError {
    fn from(err: ValidationError) -> Self {
        RecordError::ValidationFailed(vec![err])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_username_is_a_conflict() {
        let err = RecordError::UsernameTaken("sam".into());
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert!(err.message().contains("sam"));
    }

    #[test]
    fn domain_errors_become_storage_errors() {
        let err: RecordError = DomainError::storage("lock poisoned").into();
        assert_eq!(err.code(), ErrorCode::StorageError);
    }
}
