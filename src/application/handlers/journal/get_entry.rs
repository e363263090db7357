//! GetEntryHandler - Query handler for a single journal entry.

use std::sync::Arc;

use crate::domain::foundation::EntryId;
use crate::domain::journal::{JournalEntry, JournalError};
use crate::ports::JournalRepository;

#[derive(Debug, Clone)]
pub struct GetEntryQuery {
    pub entry_id: EntryId,
}

pub struct GetEntryHandler {
    repository: Arc<dyn JournalRepository>,
}

impl GetEntryHandler {
    pub fn new(repository: Arc<dyn JournalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetEntryQuery) -> Result<JournalEntry, JournalError> {
        self.repository
            .find_by_id(query.entry_id)
            .await?
            .ok_or_else(|| JournalError::not_found(query.entry_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::journal::test_support::MockJournalRepository;
    use crate::domain::foundation::UserId;
    use crate::domain::journal::NewJournalEntry;

    #[tokio::test]
    async fn returns_same_entry_on_repeated_reads() {
        let repo = Arc::new(MockJournalRepository::new());
        let draft = NewJournalEntry::new(UserId::new(1), "Missed the bus", "annoyed", "Nothing ever works out", None, None)
            .unwrap();
        let stored = repo.create(draft).await.unwrap();
        let handler = GetEntryHandler::new(repo);

        let first = handler.handle(GetEntryQuery { entry_id: stored.id() }).await.unwrap();
        let second = handler.handle(GetEntryQuery { entry_id: stored.id() }).await.unwrap();

        assert_eq!(first, stored);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn missing_entry_is_not_found() {
        let handler = GetEntryHandler::new(Arc::new(MockJournalRepository::new()));

        let err = handler.handle(GetEntryQuery { entry_id: EntryId::new(42) }).await.unwrap_err();
        assert_eq!(err, JournalError::NotFound(EntryId::new(42)));
    }
}
