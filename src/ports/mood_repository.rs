//! Mood log repository port.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::records::{Mood, NewMood, RecordError};

#[async_trait]
pub trait MoodRepository: Send + Sync {
    async fn create(&self, draft: NewMood) -> Result<Mood, RecordError>;

    /// Newest first.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Mood>, RecordError>;
}
