//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::records::{RecordError, User, Username};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user.
    ///
    /// # Errors
    ///
    /// - `UsernameTaken` if the username already exists (case-sensitive)
    async fn create(&self, username: Username) -> Result<User, RecordError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RecordError>;

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, RecordError>;
}
