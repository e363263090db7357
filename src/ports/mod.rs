//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## AI Ports
//!
//! - `AIProvider` - Raw LLM completion service
//! - `ThoughtClassifier` - Cognitive distortion classification
//!
//! ## Record Ports
//!
//! - `JournalRepository` - Journal persistence boundary
//! - `UserRepository`, `MoodRepository`, `HabitRepository`,
//!   `MeditationRepository` - Collateral record collections
//! - `ThoughtPatternReader` - Static distortion library

mod ai_provider;
mod habit_repository;
mod journal_repository;
mod meditation_repository;
mod mood_repository;
mod thought_classifier;
mod thought_pattern_reader;
mod user_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, RequestMetadata,
};
pub use habit_repository::HabitRepository;
pub use journal_repository::JournalRepository;
pub use meditation_repository::MeditationRepository;
pub use mood_repository::MoodRepository;
pub use thought_classifier::ThoughtClassifier;
pub use thought_pattern_reader::ThoughtPatternReader;
pub use user_repository::UserRepository;
