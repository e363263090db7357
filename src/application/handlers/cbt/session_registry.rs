//! In-process registry of open guided sessions.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::domain::cbt::{CbtSession, SessionError};
use crate::domain::foundation::{CbtSessionId, UserId};

#[derive(Debug, Clone)]
struct Slot {
    session: CbtSession,
    last_active: Instant,
}

/// Open sessions keyed by id, bounded by `capacity`.
///
/// A session untouched for `idle_ttl` is dropped the next time a slot is
/// requested, unless a classification or submission is in flight.
/// Closures passed to [`SessionRegistry::modify`] run under the write
/// lock and must not block.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<CbtSessionId, Slot>>>,
    capacity: usize,
    idle_ttl: Duration,
}

impl SessionRegistry {
    pub fn new(capacity: usize, idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            capacity,
            idle_ttl,
        }
    }

    /// Opens a fresh session for `user_id`, evicting idle ones first.
    pub async fn open(&self, user_id: UserId) -> Result<CbtSession, SessionError> {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, slot| {
            slot.session.is_busy() || now.duration_since(slot.last_active) < self.idle_ttl
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, "idle sessions evicted");
        }

        if sessions.len() >= self.capacity {
            return Err(SessionError::TooManySessions);
        }
        let session = CbtSession::new(CbtSessionId::new(), user_id);
        sessions.insert(
            *session.id(),
            Slot {
                session: session.clone(),
                last_active: now,
            },
        );
        Ok(session)
    }

    /// Copy of the session as it is now.
    pub async fn snapshot(&self, id: &CbtSessionId) -> Option<CbtSession> {
        self.sessions.read().await.get(id).map(|slot| slot.session.clone())
    }

    /// Runs `f` on the stored session and marks it active. `None` if there
    /// is no such session.
    pub async fn modify<R>(&self, id: &CbtSessionId, f: impl FnOnce(&mut CbtSession) -> R) -> Option<R> {
        self.sessions.write().await.get_mut(id).map(|slot| {
            slot.last_active = Instant::now();
            f(&mut slot.session)
        })
    }

    pub async fn remove(&self, id: &CbtSessionId) -> Option<CbtSession> {
        self.sessions.write().await.remove(id).map(|slot| slot.session)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
