//! CBT journaling domain module.
//!
//! The guided flow collects a situation, the emotion it caused and the
//! automatic thought behind it, asks a classifier which cognitive
//! distortion the thought matches, and ends with a challenge and a
//! reframe the user can accept or rewrite.

mod diagnosis;
mod errors;
mod session;
mod step;

pub use diagnosis::{ClassifierDiagnosis, ThoughtRecord};
pub use errors::{CbtError, ClassificationFailed, SessionError};
pub use session::{
    Advance, AnalysisApplied, CbtSession, SessionFields, SessionState, SessionStatus,
    SubmissionApplied, Ticket, SUGGESTIONS_UNAVAILABLE,
};
pub use step::CbtStep;
