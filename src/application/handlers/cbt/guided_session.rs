//! GuidedSessionHandler - Drives the CBT session state machine against
//! the classifier and the journal.
//!
//! Classification and submission run on their own tasks, so a dropped
//! request cannot leave a session stuck in a busy state. Their results are
//! applied through the session's ticket and dropped if the session was
//! cancelled in the meantime.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::cbt::{
    Advance, AnalysisApplied, CbtSession, ClassificationFailed, SessionError, SubmissionApplied,
    ThoughtRecord, Ticket,
};
use crate::domain::foundation::{CbtSessionId, UserId};
use crate::domain::journal::{JournalEntry, JournalError};
use crate::ports::{JournalRepository, ThoughtClassifier};

use super::session_registry::SessionRegistry;

pub struct GuidedSessionHandler {
    registry: SessionRegistry,
    classifier: Arc<dyn ThoughtClassifier>,
    journal: Arc<dyn JournalRepository>,
    analysis_timeout: Duration,
}

impl GuidedSessionHandler {
    pub fn new(
        registry: SessionRegistry,
        classifier: Arc<dyn ThoughtClassifier>,
        journal: Arc<dyn JournalRepository>,
        analysis_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            classifier,
            journal,
            analysis_timeout,
        }
    }

    pub async fn start(&self, user_id: UserId) -> Result<CbtSession, SessionError> {
        let session = self.registry.open(user_id).await?;
        tracing::info!(session_id = %session.id(), user_id = %user_id, "cbt session opened");
        Ok(session)
    }

    pub async fn get(&self, id: CbtSessionId) -> Result<CbtSession, SessionError> {
        self.registry
            .snapshot(&id)
            .await
            .ok_or(SessionError::NotFound(id))
    }

    /// Submits the value for the current step.
    ///
    /// Leaving the thought step waits for classification (bounded by the
    /// analysis timeout) and returns the session on the challenge/reframe
    /// step, with or without suggestions.
    pub async fn advance(&self, id: CbtSessionId, value: &str) -> Result<CbtSession, SessionError> {
        let (advance, session) = self
            .registry
            .modify(&id, |s| s.advance(value).map(|a| (a, s.clone())))
            .await
            .ok_or(SessionError::NotFound(id))??;

        match advance {
            Advance::Moved(step) => {
                tracing::debug!(session_id = %id, step = ?step, "session advanced");
                Ok(session)
            }
            Advance::Analyze { ticket, record } => {
                tracing::debug!(session_id = %id, "session analyzing");
                self.analyze(id, ticket, record).await?;
                self.get(id).await
            }
        }
    }

    async fn analyze(&self, id: CbtSessionId, ticket: Ticket, record: ThoughtRecord) -> Result<(), SessionError> {
        let registry = self.registry.clone();
        let classifier = self.classifier.clone();
        let limit = self.analysis_timeout;

        let task = tokio::spawn(async move {
            let outcome = match tokio::time::timeout(limit, classifier.classify(&record)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(ClassificationFailed::timed_out(limit.as_secs())),
            };
            if let Err(err) = &outcome {
                tracing::warn!(
                    session_id = %id,
                    reason = err.reason(),
                    "classification failed, continuing without suggestions"
                );
            }
            registry.modify(&id, |s| s.complete_analysis(ticket, outcome)).await
        });

        let applied = match task.await {
            Ok(applied) => applied,
            Err(join_err) => {
                tracing::error!(session_id = %id, error = %join_err, "classification task aborted");
                self.registry
                    .modify(&id, |s| {
                        s.complete_analysis(ticket, Err(ClassificationFailed::new("classification task aborted")))
                    })
                    .await
            }
        };

        match applied {
            Some(AnalysisApplied::Discarded) | None => {
                tracing::debug!(session_id = %id, "late classification result dropped");
                Err(SessionError::Cancelled)
            }
            Some(applied) => {
                tracing::info!(session_id = %id, outcome = ?applied, "analysis applied");
                Ok(())
            }
        }
    }

    pub async fn back(&self, id: CbtSessionId) -> Result<CbtSession, SessionError> {
        let (step, session) = self
            .registry
            .modify(&id, |s| s.go_back().map(|step| (step, s.clone())))
            .await
            .ok_or(SessionError::NotFound(id))??;
        tracing::debug!(session_id = %id, step = ?step, "session stepped back");
        Ok(session)
    }

    /// Overwrites the challenge and/or reframe. `None` keeps a field.
    pub async fn edit_suggestions(
        &self,
        id: CbtSessionId,
        challenge: Option<String>,
        reframe: Option<String>,
    ) -> Result<CbtSession, SessionError> {
        self.registry
            .modify(&id, |s| {
                s.edit_suggestions(challenge.as_deref(), reframe.as_deref())
                    .map(|_| s.clone())
            })
            .await
            .ok_or(SessionError::NotFound(id))?
    }

    /// Persists the collected record. The session is discarded on success
    /// and kept intact on failure.
    pub async fn submit(&self, id: CbtSessionId) -> Result<JournalEntry, SessionError> {
        let (ticket, draft) = self
            .registry
            .modify(&id, |s| s.begin_submission())
            .await
            .ok_or(SessionError::NotFound(id))??;

        let registry = self.registry.clone();
        let journal = self.journal.clone();
        let task = tokio::spawn(async move {
            let outcome = journal.create(draft).await;
            let applied = registry.modify(&id, |s| s.complete_submission(ticket, outcome)).await;
            if let Some(SubmissionApplied::Submitted(_)) = &applied {
                registry.remove(&id).await;
            }
            applied
        });

        let applied = match task.await {
            Ok(applied) => applied,
            Err(join_err) => {
                tracing::error!(session_id = %id, error = %join_err, "submission task aborted");
                self.registry
                    .modify(&id, |s| {
                        s.complete_submission(ticket, Err(JournalError::storage("submission interrupted")))
                    })
                    .await
            }
        };

        match applied {
            Some(SubmissionApplied::Submitted(entry)) => {
                tracing::info!(session_id = %id, entry_id = %entry.id(), "session submitted");
                Ok(entry)
            }
            Some(SubmissionApplied::Failed(err)) => {
                tracing::warn!(session_id = %id, error = %err, "session submission failed");
                Err(SessionError::SubmissionFailed(err))
            }
            Some(SubmissionApplied::Discarded) | None => {
                tracing::debug!(session_id = %id, "late submission result dropped");
                Err(SessionError::Cancelled)
            }
        }
    }

    /// Cancels and discards the session. Allowed in any state.
    pub async fn cancel(&self, id: CbtSessionId) -> Result<(), SessionError> {
        self.registry
            .modify(&id, |s| s.cancel())
            .await
            .ok_or(SessionError::NotFound(id))?;
        self.registry.remove(&id).await;
        tracing::info!(session_id = %id, "cbt session cancelled");
        Ok(())
    }
}
