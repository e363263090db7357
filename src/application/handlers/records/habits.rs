//! Habit handlers. Listing reports each habit with its current streak.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::foundation::{HabitId, Timestamp, UserId};
use crate::domain::records::{
    current_streak, Habit, HabitCompletion, HabitPatch, HabitView, NewHabit, RecordError,
};
use crate::ports::HabitRepository;

async fn view_of(
    repository: &dyn HabitRepository,
    habit: Habit,
    today: NaiveDate,
) -> Result<HabitView, RecordError> {
    let completions = repository.list_completions(habit.id()).await?;
    let current_streak = current_streak(completions.iter().map(|c| c.completed_on()), today);
    Ok(HabitView { habit, current_streak })
}

#[derive(Debug, Clone)]
pub struct CreateHabitCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub target_per_week: Option<i64>,
}

pub struct CreateHabitHandler {
    repository: Arc<dyn HabitRepository>,
}

impl CreateHabitHandler {
    pub fn new(repository: Arc<dyn HabitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateHabitCommand) -> Result<HabitView, RecordError> {
        let draft = NewHabit::new(cmd.user_id, &cmd.name, cmd.description, cmd.target_per_week)
            .map_err(RecordError::validation)?;
        let habit = self.repository.create(draft).await?;
        tracing::debug!(user_id = %cmd.user_id, habit_id = %habit.id(), "habit created");
        Ok(HabitView {
            habit,
            current_streak: 0,
        })
    }
}

pub struct ListHabitsHandler {
    repository: Arc<dyn HabitRepository>,
}

impl ListHabitsHandler {
    pub fn new(repository: Arc<dyn HabitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<Vec<HabitView>, RecordError> {
        self.handle_on(user_id, Timestamp::now().date()).await
    }

    /// Streaks are computed relative to `today`.
    pub async fn handle_on(&self, user_id: UserId, today: NaiveDate) -> Result<Vec<HabitView>, RecordError> {
        let habits = self.repository.list_by_user(user_id).await?;
        let mut views = Vec::with_capacity(habits.len());
        for habit in habits {
            views.push(view_of(self.repository.as_ref(), habit, today).await?);
        }
        Ok(views)
    }
}

/// `description: Some(None)` clears the description.
#[derive(Debug, Clone)]
pub struct UpdateHabitCommand {
    pub habit_id: HabitId,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub target_per_week: Option<i64>,
}

pub struct UpdateHabitHandler {
    repository: Arc<dyn HabitRepository>,
}

impl UpdateHabitHandler {
    pub fn new(repository: Arc<dyn HabitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateHabitCommand) -> Result<HabitView, RecordError> {
        let patch = HabitPatch::new(cmd.name.as_deref(), cmd.description, cmd.target_per_week)
            .map_err(RecordError::validation)?;
        let habit = self.repository.update(cmd.habit_id, &patch).await?;
        view_of(self.repository.as_ref(), habit, Timestamp::now().date()).await
    }
}

#[derive(Debug, Clone)]
pub struct RecordHabitCompletionCommand {
    pub habit_id: HabitId,
    /// Defaults to today (UTC).
    pub completed_on: Option<NaiveDate>,
}

pub struct RecordHabitCompletionHandler {
    repository: Arc<dyn HabitRepository>,
}

impl RecordHabitCompletionHandler {
    pub fn new(repository: Arc<dyn HabitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordHabitCompletionCommand) -> Result<HabitCompletion, RecordError> {
        let completed_on = cmd.completed_on.unwrap_or_else(|| Timestamp::now().date());
        let completion = self.repository.record_completion(cmd.habit_id, completed_on).await?;
        tracing::debug!(habit_id = %cmd.habit_id, %completed_on, "habit completion recorded");
        Ok(completion)
    }
}

pub struct ListHabitCompletionsHandler {
    repository: Arc<dyn HabitRepository>,
}

impl ListHabitCompletionsHandler {
    pub fn new(repository: Arc<dyn HabitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, habit_id: HabitId) -> Result<Vec<HabitCompletion>, RecordError> {
        if self.repository.find_by_id(habit_id).await?.is_none() {
            return Err(RecordError::HabitNotFound(habit_id));
        }
        self.repository.list_completions(habit_id).await
    }
}
