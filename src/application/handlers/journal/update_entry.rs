//! UpdateEntryHandler - Command handler for the challenge/reframe patch.

use std::sync::Arc;

use crate::domain::foundation::EntryId;
use crate::domain::journal::{JournalEntry, JournalError, JournalPatch};
use crate::ports::JournalRepository;

/// Partial update. Absent fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateEntryCommand {
    pub entry_id: EntryId,
    pub challenge: Option<String>,
    pub reframe: Option<String>,
}

pub struct UpdateEntryHandler {
    repository: Arc<dyn JournalRepository>,
}

impl UpdateEntryHandler {
    pub fn new(repository: Arc<dyn JournalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateEntryCommand) -> Result<JournalEntry, JournalError> {
        let patch = JournalPatch::new(cmd.challenge, cmd.reframe).map_err(JournalError::validation)?;

        let entry = self.repository.update(cmd.entry_id, &patch).await?;
        tracing::info!(
            entry_id = %entry.id(),
            challenge = patch.challenge().is_some(),
            reframe = patch.reframe().is_some(),
            "journal entry updated"
        );
        Ok(entry)
    }
}
