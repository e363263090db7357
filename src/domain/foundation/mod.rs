//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Mindwell domain.

mod errors;
mod ids;
mod state_machine;
mod text;
mod timestamp;

pub use errors::{DomainError, ErrorCode, FieldIssue, ValidationError};
pub use ids::{
    CbtSessionId, EntryId, HabitCompletionId, HabitId, MeditationCompletionId, MeditationId,
    MoodId, ThoughtPatternId, UserId,
};
pub use state_machine::StateMachine;
pub use text::{bounded_text, optional_text, required_text};
pub use timestamp::Timestamp;
