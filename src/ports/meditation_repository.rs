//! Meditation catalog and completion log port.

use async_trait::async_trait;

use crate::domain::foundation::{MeditationId, UserId};
use crate::domain::records::{Meditation, MeditationCompletion, NewMeditationCompletion, RecordError};

#[async_trait]
pub trait MeditationRepository: Send + Sync {
    /// The whole catalog, in id order.
    async fn list(&self) -> Result<Vec<Meditation>, RecordError>;

    async fn find_by_id(&self, id: MeditationId) -> Result<Option<Meditation>, RecordError>;

    /// # Errors
    ///
    /// - `MeditationNotFound` if the catalog has no such meditation
    async fn record_completion(
        &self,
        draft: NewMeditationCompletion,
    ) -> Result<MeditationCompletion, RecordError>;

    /// Newest first.
    async fn list_completions_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<MeditationCompletion>, RecordError>;
}
