//! CreateEntryHandler - Command handler for storing journal entries.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::journal::{JournalEntry, JournalError, NewJournalEntry};
use crate::ports::JournalRepository;

/// Command to store a finished journal entry.
#[derive(Debug, Clone)]
pub struct CreateEntryCommand {
    pub user_id: UserId,
    pub situation: String,
    pub emotion: String,
    pub thought: String,
    pub challenge: Option<String>,
    pub reframe: Option<String>,
}

/// Handler for creating journal entries.
pub struct CreateEntryHandler {
    repository: Arc<dyn JournalRepository>,
}

impl CreateEntryHandler {
    pub fn new(repository: Arc<dyn JournalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateEntryCommand) -> Result<JournalEntry, JournalError> {
        let draft = NewJournalEntry::new(
            cmd.user_id,
            &cmd.situation,
            &cmd.emotion,
            &cmd.thought,
            cmd.challenge,
            cmd.reframe,
        )
        .map_err(JournalError::validation)?;

        let entry = self.repository.create(draft).await?;
        tracing::info!(entry_id = %entry.id(), user_id = %entry.user_id(), "journal entry created");
        Ok(entry)
    }
}
