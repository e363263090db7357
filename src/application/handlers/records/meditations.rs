//! Meditation catalog and completion handlers.

use std::sync::Arc;

use crate::domain::foundation::{MeditationId, UserId};
use crate::domain::records::{Meditation, MeditationCompletion, NewMeditationCompletion, RecordError};
use crate::ports::MeditationRepository;

pub struct ListMeditationsHandler {
    repository: Arc<dyn MeditationRepository>,
}

impl ListMeditationsHandler {
    pub fn new(repository: Arc<dyn MeditationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Meditation>, RecordError> {
        self.repository.list().await
    }
}

pub struct GetMeditationHandler {
    repository: Arc<dyn MeditationRepository>,
}

impl GetMeditationHandler {
    pub fn new(repository: Arc<dyn MeditationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: MeditationId) -> Result<Meditation, RecordError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(RecordError::MeditationNotFound(id))
    }
}

#[derive(Debug, Clone)]
pub struct RecordMeditationCommand {
    pub user_id: UserId,
    pub meditation_id: MeditationId,
    pub duration_seconds: i64,
}

pub struct RecordMeditationHandler {
    repository: Arc<dyn MeditationRepository>,
}

impl RecordMeditationHandler {
    pub fn new(repository: Arc<dyn MeditationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordMeditationCommand) -> Result<MeditationCompletion, RecordError> {
        let draft = NewMeditationCompletion::new(cmd.user_id, cmd.meditation_id, cmd.duration_seconds)?;
        let completion = self.repository.record_completion(draft).await?;
        tracing::debug!(
            user_id = %cmd.user_id,
            meditation_id = %cmd.meditation_id,
            "meditation completed"
        );
        Ok(completion)
    }
}

pub struct ListMeditationCompletionsHandler {
    repository: Arc<dyn MeditationRepository>,
}

impl ListMeditationCompletionsHandler {
    pub fn new(repository: Arc<dyn MeditationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<Vec<MeditationCompletion>, RecordError> {
        self.repository.list_completions_by_user(user_id).await
    }
}
