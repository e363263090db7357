//! User handlers.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::records::{RecordError, User, Username};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub username: String,
}

pub struct CreateUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateUserCommand) -> Result<User, RecordError> {
        let username = Username::parse(&cmd.username)?;
        let user = self.repository.create(username).await?;
        tracing::info!(user_id = %user.id(), "user created");
        Ok(user)
    }
}

pub struct GetUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<User, RecordError> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or(RecordError::UserNotFound(user_id))
    }
}
