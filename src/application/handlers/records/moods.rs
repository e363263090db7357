//! Mood log handlers.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::records::{Mood, NewMood, RecordError};
use crate::ports::MoodRepository;

#[derive(Debug, Clone)]
pub struct LogMoodCommand {
    pub user_id: UserId,
    pub mood: String,
    pub intensity: i64,
    pub note: Option<String>,
}

pub struct LogMoodHandler {
    repository: Arc<dyn MoodRepository>,
}

impl LogMoodHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: LogMoodCommand) -> Result<Mood, RecordError> {
        let draft = NewMood::new(cmd.user_id, &cmd.mood, cmd.intensity, cmd.note)
            .map_err(RecordError::validation)?;
        let mood = self.repository.create(draft).await?;
        tracing::debug!(user_id = %cmd.user_id, mood_id = %mood.id(), "mood logged");
        Ok(mood)
    }
}

pub struct ListMoodsHandler {
    repository: Arc<dyn MoodRepository>,
}

impl ListMoodsHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<Vec<Mood>, RecordError> {
        self.repository.list_by_user(user_id).await
    }
}
