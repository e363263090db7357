//! Collateral record types: users, moods, habits, meditations and the
//! thought-pattern reference library.

mod errors;
mod habit;
mod meditation;
mod mood;
mod thought_pattern;
mod user;

pub use errors::RecordError;
pub use habit::{
    current_streak, Habit, HabitCompletion, HabitPatch, HabitView, NewHabit, MAX_TARGET_PER_WEEK,
    MIN_TARGET_PER_WEEK,
};
pub use meditation::{
    seed_catalog, Meditation, MeditationCategory, MeditationCompletion, NewMeditationCompletion,
};
pub use mood::{Mood, NewMood, MAX_INTENSITY, MIN_INTENSITY};
pub use thought_pattern::{find_thought_pattern, ThoughtPattern, THOUGHT_PATTERNS};
pub use user::{User, Username, MAX_USERNAME_CHARS, MIN_USERNAME_CHARS};
