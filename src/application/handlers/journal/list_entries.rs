//! ListEntriesHandler - Query handler for a user's journal.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::journal::{JournalEntry, JournalError};
use crate::ports::JournalRepository;

#[derive(Debug, Clone)]
pub struct ListEntriesQuery {
    pub user_id: UserId,
}

/// Lists entries newest first.
pub struct ListEntriesHandler {
    repository: Arc<dyn JournalRepository>,
}

impl ListEntriesHandler {
    pub fn new(repository: Arc<dyn JournalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListEntriesQuery) -> Result<Vec<JournalEntry>, JournalError> {
        let entries = self.repository.list_by_user(query.user_id).await?;
        tracing::debug!(user_id = %query.user_id, count = entries.len(), "listed journal entries");
        Ok(entries)
    }
}
