//! Habit repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{HabitId, UserId};
use crate::domain::records::{Habit, HabitCompletion, HabitPatch, NewHabit, RecordError};

#[async_trait]
pub trait HabitRepository: Send + Sync {
    async fn create(&self, draft: NewHabit) -> Result<Habit, RecordError>;

    async fn find_by_id(&self, id: HabitId) -> Result<Option<Habit>, RecordError>;

    /// Oldest first.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Habit>, RecordError>;

    /// # Errors
    ///
    /// - `HabitNotFound` if no habit has that id
    async fn update(&self, id: HabitId, patch: &HabitPatch) -> Result<Habit, RecordError>;

    /// Mark a habit done on a date. Recording the same date twice returns
    /// the existing completion.
    ///
    /// # Errors
    ///
    /// - `HabitNotFound` if no habit has that id
    async fn record_completion(
        &self,
        habit_id: HabitId,
        completed_on: NaiveDate,
    ) -> Result<HabitCompletion, RecordError>;

    /// Completions of one habit, most recent date first.
    async fn list_completions(&self, habit_id: HabitId) -> Result<Vec<HabitCompletion>, RecordError>;
}
