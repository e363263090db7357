//! Journal-specific error types.

use crate::domain::foundation::{DomainError, EntryId, ErrorCode, FieldIssue, ValidationError};

/// Errors raised by the journal persistence boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    /// No entry with that id.
    NotFound(EntryId),
    /// Input failed validation; nothing was stored.
    ValidationFailed(Vec<ValidationError>),
    /// The store could not read or write.
    Storage(String),
}

impl JournalError {
    pub fn not_found(id: EntryId) -> Self {
        JournalError::NotFound(id)
    }

    pub fn validation(issues: Vec<ValidationError>) -> Self {
        JournalError::ValidationFailed(issues)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        JournalError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            JournalError::NotFound(_) => ErrorCode::JournalEntryNotFound,
            JournalError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            JournalError::Storage(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            JournalError::NotFound(id) => format!("Journal entry not found: {}", id),
            JournalError::ValidationFailed(issues) => {
                let fields: Vec<&str> = issues.iter().map(|e| e.field()).collect();
                format!("Validation failed for: {}", fields.join(", "))
            }
            JournalError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }

    /// Field-level issues, empty unless this is a validation failure.
    pub fn issues(&self) -> Vec<FieldIssue> {
        match self {
            JournalError::ValidationFailed(issues) => issues.iter().map(|e| e.to_issue()).collect(),
            _ => Vec::new(),
        }
    }
}

impl std::fmt::Display for JournalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for JournalError {}

impl From<DomainError> for JournalError {
    fn from(err: DomainError) -> Self {
        JournalError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        assert_eq!(JournalError::not_found(EntryId::new(2)).code(), ErrorCode::JournalEntryNotFound);
        assert_eq!(JournalError::storage("x").code(), ErrorCode::StorageError);
        assert_eq!(JournalError::validation(vec![]).code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn validation_message_lists_fields() {
        let err = JournalError::validation(vec![
            ValidationError::empty_field("situation"),
            ValidationError::too_short("thought", 5, 1),
        ]);
        assert_eq!(err.message(), "Validation failed for: situation, thought");
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn domain_error_becomes_storage_error() {
        let err: JournalError = DomainError::storage("disk full").into();
        assert!(matches!(err, JournalError::Storage(_)));
    }
}
