//! Journal domain module.
//!
//! CBT journal entries: the situation / emotion / thought triple a user
//! records, plus the optional challenge and reframe that answer it.

mod entry;
mod errors;

pub use entry::{
    JournalEntry, JournalPatch, NewJournalEntry, MAX_SUGGESTION_CHARS, MIN_EMOTION_CHARS,
    MIN_SITUATION_CHARS, MIN_THOUGHT_CHARS,
};
pub use errors::JournalError;
