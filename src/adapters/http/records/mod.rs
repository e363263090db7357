//! HTTP adapter for users, moods, habits, meditations and the thought
//! pattern library.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateHabitRequest, CreateUserRequest, HabitCompletionResponse, HabitResponse, LogMoodRequest,
    MeditationCompletionResponse, MeditationResponse, MoodResponse, RecordCompletionRequest,
    RecordMeditationRequest, ThoughtPatternResponse, UpdateHabitRequest, UserResponse,
};
pub use handlers::RecordHandlers;
pub use routes::record_routes;
