//! Journal persistence boundary.
//!
//! Validation of the draft happens before it reaches the repository; the
//! repository assigns ids and creation timestamps.

use async_trait::async_trait;

use crate::domain::foundation::{EntryId, UserId};
use crate::domain::journal::{JournalEntry, JournalError, JournalPatch, NewJournalEntry};

#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Store a new entry and return it with its generated fields.
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure
    async fn create(&self, draft: NewJournalEntry) -> Result<JournalEntry, JournalError>;

    /// Merge `patch` into an existing entry. Last write wins.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no entry has that id
    /// - `Storage` on persistence failure
    async fn update(&self, id: EntryId, patch: &JournalPatch) -> Result<JournalEntry, JournalError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: EntryId) -> Result<Option<JournalEntry>, JournalError>;

    /// Entries of one user, newest first; ties by id descending.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<JournalEntry>, JournalError>;
}
