//! Journal command and query handlers.

mod create_entry;
mod get_entry;
mod list_entries;
mod update_entry;

pub use create_entry::{CreateEntryCommand, CreateEntryHandler};
pub use get_entry::{GetEntryHandler, GetEntryQuery};
pub use list_entries::{ListEntriesHandler, ListEntriesQuery};
pub use update_entry::{UpdateEntryCommand, UpdateEntryHandler};

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::foundation::{EntryId, Timestamp, UserId};
    use crate::domain::journal::{JournalEntry, JournalError, JournalPatch, NewJournalEntry};
    use crate::ports::JournalRepository;

    /// Vec-backed journal repository that can be told to fail.
    pub struct MockJournalRepository {
        entries: Mutex<Vec<JournalEntry>>,
        fail_writes: bool,
    }

    impl MockJournalRepository {
        pub fn new() -> Self {
            Self {
                entries: Mutex::new(Vec::new()),
                fail_writes: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                entries: Mutex::new(Vec::new()),
                fail_writes: true,
            }
        }

        pub fn stored(&self) -> Vec<JournalEntry> {
            self.entries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl JournalRepository for MockJournalRepository {
        async fn create(&self, draft: NewJournalEntry) -> Result<JournalEntry, JournalError> {
            if self.fail_writes {
                return Err(JournalError::storage("Simulated write failure"));
            }
            let mut entries = self.entries.lock().unwrap();
            let id = EntryId::new(entries.len() as u64 + 1);
            let entry = JournalEntry::create(id, draft, Timestamp::now());
            entries.push(entry.clone());
            Ok(entry)
        }

        async fn update(&self, id: EntryId, patch: &JournalPatch) -> Result<JournalEntry, JournalError> {
            if self.fail_writes {
                return Err(JournalError::storage("Simulated write failure"));
            }
            let mut entries = self.entries.lock().unwrap();
            let entry = entries
                .iter_mut()
                .find(|e| e.id() == id)
                .ok_or_else(|| JournalError::not_found(id))?;
            entry.apply(patch);
            Ok(entry.clone())
        }

        async fn find_by_id(&self, id: EntryId) -> Result<Option<JournalEntry>, JournalError> {
            Ok(self.entries.lock().unwrap().iter().find(|e| e.id() == id).cloned())
        }

        async fn list_by_user(&self, user_id: UserId) -> Result<Vec<JournalEntry>, JournalError> {
            let mut entries: Vec<JournalEntry> = self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.user_id() == user_id)
                .cloned()
                .collect();
            entries.reverse();
            Ok(entries)
        }
    }
}
