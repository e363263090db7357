//! CBT-specific error types.

use thiserror::Error;

use crate::domain::foundation::{CbtSessionId, ErrorCode, FieldIssue, ValidationError};
use crate::domain::journal::JournalError;

/// The classifier could not produce a diagnosis.
///
/// Callers see one failure kind whatever went wrong; `reason` is kept
/// for logs only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("thought classification failed")]
pub struct ClassificationFailed {
    reason: String,
}

impl ClassificationFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn timed_out(after_secs: u64) -> Self {
        Self::new(format!("no answer within {}s", after_secs))
    }

    pub fn not_configured() -> Self {
        Self::new("no classifier credential configured")
    }

    /// Internal cause, never shown to API callers.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Errors from the one-shot analysis endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CbtError {
    ValidationFailed(Vec<ValidationError>),
    ClassificationFailed(ClassificationFailed),
}

impl CbtError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CbtError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            CbtError::ClassificationFailed(_) => ErrorCode::ClassificationFailed,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CbtError::ValidationFailed(issues) => {
                let fields: Vec<&str> = issues.iter().map(|e| e.field()).collect();
                format!("Validation failed for: {}", fields.join(", "))
            }
            CbtError::ClassificationFailed(_) => "Unable to analyze thought right now".to_string(),
        }
    }

    pub fn issues(&self) -> Vec<FieldIssue> {
        match self {
            CbtError::ValidationFailed(issues) => issues.iter().map(|e| e.to_issue()).collect(),
            CbtError::ClassificationFailed(_) => Vec::new(),
        }
    }
}

impl std::fmt::Display for CbtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CbtError {}

impl From<ClassificationFailed> for CbtError {
    fn from(err: ClassificationFailed) -> Self {
        CbtError::ClassificationFailed(err)
    }
}

/// Errors from driving a guided session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Step input failed validation; the step did not change.
    ValidationFailed(Vec<ValidationError>),
    /// A classification or submission is still in flight.
    Busy,
    /// The requested move is not allowed from the current state.
    InvalidTransition(String),
    /// The session was cancelled.
    Cancelled,
    /// No open session with that id.
    NotFound(CbtSessionId),
    /// The registry is full.
    TooManySessions,
    /// Persisting the finished entry failed; the session is intact.
    SubmissionFailed(JournalError),
}

impl SessionError {
    pub fn validation(err: ValidationError) -> Self {
        SessionError::ValidationFailed(vec![err])
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        SessionError::InvalidTransition(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            SessionError::Busy => ErrorCode::SessionBusy,
            SessionError::InvalidTransition(_) | SessionError::Cancelled => {
                ErrorCode::InvalidStateTransition
            }
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::TooManySessions => ErrorCode::CapacityExceeded,
            SessionError::SubmissionFailed(err) => err.code(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionError::ValidationFailed(issues) => {
                let fields: Vec<&str> = issues.iter().map(|e| e.field()).collect();
                format!("Validation failed for: {}", fields.join(", "))
            }
            SessionError::Busy => "Session is busy, wait for the current action to finish".to_string(),
            SessionError::InvalidTransition(msg) => format!("Invalid transition: {}", msg),
            SessionError::Cancelled => "Session was cancelled".to_string(),
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::TooManySessions => "Too many open sessions".to_string(),
            SessionError::SubmissionFailed(err) => format!("Could not save entry: {}", err.message()),
        }
    }

    pub fn issues(&self) -> Vec<FieldIssue> {
        match self {
            SessionError::ValidationFailed(issues) => issues.iter().map(|e| e.to_issue()).collect(),
            SessionError::SubmissionFailed(err) => err.issues(),
            _ => Vec::new(),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}
