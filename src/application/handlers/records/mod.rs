//! Handlers for the collateral record collections.
//!
//! These are thin: validate into a domain draft, call the port, return the
//! stored record.

mod habits;
mod meditations;
mod moods;
mod thought_patterns;
mod users;

pub use habits::{
    CreateHabitCommand, CreateHabitHandler, ListHabitCompletionsHandler, ListHabitsHandler,
    RecordHabitCompletionCommand, RecordHabitCompletionHandler, UpdateHabitCommand,
    UpdateHabitHandler,
};
pub use meditations::{
    GetMeditationHandler, ListMeditationCompletionsHandler, ListMeditationsHandler,
    RecordMeditationCommand, RecordMeditationHandler,
};
pub use moods::{ListMoodsHandler, LogMoodCommand, LogMoodHandler};
pub use thought_patterns::ThoughtPatternHandler;
pub use users::{CreateUserCommand, CreateUserHandler, GetUserHandler};
