//! User records.

use crate::domain::foundation::{bounded_text, Timestamp, UserId, ValidationError};

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MAX_USERNAME_CHARS: usize = 50;

/// A stored user. There is no authentication; the username is the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    created_at: Timestamp,
}

impl User {
    pub fn new(id: UserId, username: Username, created_at: Timestamp) -> Self {
        Self {
            id,
            username,
            created_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Validated, trimmed username. Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let name = bounded_text("username", raw, MIN_USERNAME_CHARS, MAX_USERNAME_CHARS)?;
        if name.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(
                "username",
                "must not contain whitespace",
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
