//! Guided CBT session state machine.
//!
//! Every transition is a pure method on [`CbtSession`]. Work that needs I/O
//! (classification, persistence) is split in two halves: a `begin_*` call
//! that moves into a busy state and hands out a [`Ticket`], and a
//! `complete_*` call that applies the result only if the ticket still
//! matches. A cancelled or reset session therefore ignores late results.

use serde::Serialize;

use crate::domain::foundation::{required_text, CbtSessionId, Timestamp, UserId, ValidationError};
use crate::domain::journal::{JournalEntry, JournalError, NewJournalEntry, MAX_SUGGESTION_CHARS};

use super::diagnosis::{ClassifierDiagnosis, ThoughtRecord};
use super::errors::{ClassificationFailed, SessionError};
use super::step::CbtStep;

/// Warning shown when suggestions could not be generated.
pub const SUGGESTIONS_UNAVAILABLE: &str =
    "Automatic analysis is unavailable right now. You can write your own challenge and reframe.";

/// Handle for one in-flight classification or submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Where the session is. Busy sub-states carry the ticket they wait on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Situation,
    Emotion,
    Thought,
    /// Classifier call outstanding; the user stays on the thought step.
    Analyzing { ticket: Ticket },
    ChallengeReframe { submitting: Option<Ticket> },
    Cancelled,
}

/// Coarse activity flag exposed to front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Editing,
    Analyzing,
    Submitting,
    Cancelled,
}

/// Text collected so far. Empty strings mean "not entered yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionFields {
    pub situation: String,
    pub emotion: String,
    pub thought: String,
    pub challenge: String,
    pub reframe: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Suggestions {
    NotRequested,
    Ready(ClassifierDiagnosis),
    Unavailable,
}

/// Result of a successful forward move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The session is now on this step.
    Moved(CbtStep),
    /// The caller must classify `record` and report back with `ticket`.
    Analyze { ticket: Ticket, record: ThoughtRecord },
}

/// What [`CbtSession::complete_analysis`] did with a classifier result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisApplied {
    /// Challenge and reframe were pre-filled from the diagnosis.
    Suggested,
    /// Classification failed; the user continues with empty fields.
    Degraded,
    /// The session no longer waits on this ticket.
    Discarded,
}

/// What [`CbtSession::complete_submission`] did with a persistence result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionApplied {
    /// Stored; the session has been reset to its initial state.
    Submitted(JournalEntry),
    /// Not stored; the session is back on challenge/reframe, fields intact.
    Failed(JournalError),
    Discarded,
}

/// One run of the guided journaling wizard.
#[derive(Debug, Clone)]
pub struct CbtSession {
    id: CbtSessionId,
    user_id: UserId,
    state: SessionState,
    fields: SessionFields,
    suggestions: Suggestions,
    last_error: Option<String>,
    next_ticket: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl CbtSession {
    /// Opens a fresh session on the situation step.
    pub fn new(id: CbtSessionId, user_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            user_id,
            state: SessionState::Situation,
            fields: SessionFields::default(),
            suggestions: Suggestions::NotRequested,
            last_error: None,
            next_ticket: 1,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &CbtSessionId {
        &self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Step the user is on. `None` once cancelled.
    pub fn step(&self) -> Option<CbtStep> {
        match self.state {
            SessionState::Situation => Some(CbtStep::Situation),
            SessionState::Emotion => Some(CbtStep::Emotion),
            SessionState::Thought | SessionState::Analyzing { .. } => Some(CbtStep::Thought),
            SessionState::ChallengeReframe { .. } => Some(CbtStep::ChallengeReframe),
            SessionState::Cancelled => None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        match self.state {
            SessionState::Analyzing { .. } => SessionStatus::Analyzing,
            SessionState::ChallengeReframe { submitting: Some(_) } => SessionStatus::Submitting,
            SessionState::Cancelled => SessionStatus::Cancelled,
            _ => SessionStatus::Editing,
        }
    }

    pub fn fields(&self) -> &SessionFields {
        &self.fields
    }

    /// The classifier's verdict, once it has succeeded.
    pub fn diagnosis(&self) -> Option<&ClassifierDiagnosis> {
        match &self.suggestions {
            Suggestions::Ready(d) => Some(d),
            _ => None,
        }
    }

    /// Soft warning shown when suggestions are unavailable.
    pub fn warning(&self) -> Option<&str> {
        match self.suggestions {
            Suggestions::Unavailable => Some(SUGGESTIONS_UNAVAILABLE),
            _ => None,
        }
    }

    /// Reason the last submission attempt failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == SessionState::Cancelled
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.status(), SessionStatus::Analyzing | SessionStatus::Submitting)
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Submits the value for the current step and moves forward.
    ///
    /// Invalid input leaves the step unchanged. Leaving the thought step
    /// asks for classification, unless it was already attempted.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the value is empty or too short
    /// - `Busy` while a classification or submission is outstanding
    /// - `InvalidTransition` on the last step (use submission instead)
    /// - `Cancelled` after cancellation
    pub fn advance(&mut self, value: &str) -> Result<Advance, SessionError> {
        self.ensure_idle()?;
        let step = self.step().ok_or(SessionError::Cancelled)?;
        let (field, min) = step.required_field().ok_or_else(|| {
            SessionError::invalid_transition("challenge/reframe is the last step, submit instead")
        })?;
        let value = required_text(field, value, min).map_err(SessionError::validation)?;

        let outcome = match step {
            CbtStep::Situation => {
                self.fields.situation = value;
                self.state = SessionState::Emotion;
                Advance::Moved(CbtStep::Emotion)
            }
            CbtStep::Emotion => {
                self.fields.emotion = value;
                self.state = SessionState::Thought;
                Advance::Moved(CbtStep::Thought)
            }
            CbtStep::Thought => {
                self.fields.thought = value;
                self.leave_thought_step()?
            }
            CbtStep::ChallengeReframe => {
                return Err(SessionError::invalid_transition("already on the last step"))
            }
        };
        self.touch();
        Ok(outcome)
    }

    fn leave_thought_step(&mut self) -> Result<Advance, SessionError> {
        if self.suggestions != Suggestions::NotRequested {
            self.state = SessionState::ChallengeReframe { submitting: None };
            return Ok(Advance::Moved(CbtStep::ChallengeReframe));
        }

        let record = ThoughtRecord::new(&self.fields.situation, &self.fields.emotion, &self.fields.thought)
            .map_err(SessionError::ValidationFailed)?;
        let ticket = self.issue_ticket();
        self.state = SessionState::Analyzing { ticket };
        Ok(Advance::Analyze { ticket, record })
    }

    /// Applies a classifier result to the session waiting on `ticket`.
    ///
    /// Success pre-fills challenge and reframe. Failure still moves on to
    /// the challenge/reframe step, with empty fields and a warning.
    pub fn complete_analysis(
        &mut self,
        ticket: Ticket,
        outcome: Result<ClassifierDiagnosis, ClassificationFailed>,
    ) -> AnalysisApplied {
        if self.state != (SessionState::Analyzing { ticket }) {
            return AnalysisApplied::Discarded;
        }

        let applied = match outcome {
            Ok(diagnosis) => {
                self.fields.challenge = diagnosis.challenge().to_string();
                self.fields.reframe = diagnosis.reframe().to_string();
                self.suggestions = Suggestions::Ready(diagnosis);
                AnalysisApplied::Suggested
            }
            Err(_) => {
                self.fields.challenge.clear();
                self.fields.reframe.clear();
                self.suggestions = Suggestions::Unavailable;
                AnalysisApplied::Degraded
            }
        };
        self.state = SessionState::ChallengeReframe { submitting: None };
        self.touch();
        applied
    }

    /// Returns to the previous step without touching any collected field.
    ///
    /// # Errors
    ///
    /// - `Busy` while a classification or submission is outstanding
    /// - `InvalidTransition` on the first step
    pub fn go_back(&mut self) -> Result<CbtStep, SessionError> {
        self.ensure_idle()?;
        let step = self.step().ok_or(SessionError::Cancelled)?;
        let previous = step
            .previous()
            .ok_or_else(|| SessionError::invalid_transition("already on the first step"))?;

        self.state = match previous {
            CbtStep::Situation => SessionState::Situation,
            CbtStep::Emotion => SessionState::Emotion,
            CbtStep::Thought => SessionState::Thought,
            CbtStep::ChallengeReframe => SessionState::ChallengeReframe { submitting: None },
        };
        self.touch();
        Ok(previous)
    }

    /// Overwrites the suggested challenge and/or reframe.
    ///
    /// `None` leaves a field as it is.
    pub fn edit_suggestions(
        &mut self,
        challenge: Option<&str>,
        reframe: Option<&str>,
    ) -> Result<(), SessionError> {
        self.ensure_idle()?;
        if self.step() != Some(CbtStep::ChallengeReframe) {
            return Err(SessionError::invalid_transition(
                "challenge and reframe can only be edited on the last step",
            ));
        }

        let issues: Vec<ValidationError> = [("challenge", challenge), ("reframe", reframe)]
            .into_iter()
            .filter_map(|(field, value)| {
                let len = value?.trim().chars().count();
                (len > MAX_SUGGESTION_CHARS)
                    .then(|| ValidationError::too_long(field, MAX_SUGGESTION_CHARS, len))
            })
            .collect();
        if !issues.is_empty() {
            return Err(SessionError::ValidationFailed(issues));
        }

        if let Some(challenge) = challenge {
            self.fields.challenge = challenge.trim().to_string();
        }
        if let Some(reframe) = reframe {
            self.fields.reframe = reframe.trim().to_string();
        }
        self.touch();
        Ok(())
    }

    /// Starts persisting the accumulated record.
    ///
    /// Only allowed on the challenge/reframe step with nothing in flight.
    pub fn begin_submission(&mut self) -> Result<(Ticket, NewJournalEntry), SessionError> {
        self.ensure_idle()?;
        if self.step() != Some(CbtStep::ChallengeReframe) {
            return Err(SessionError::invalid_transition(
                "entries can only be submitted from the challenge/reframe step",
            ));
        }

        let draft = NewJournalEntry::new(
            self.user_id,
            &self.fields.situation,
            &self.fields.emotion,
            &self.fields.thought,
            Some(self.fields.challenge.clone()),
            Some(self.fields.reframe.clone()),
        )
        .map_err(SessionError::ValidationFailed)?;

        let ticket = self.issue_ticket();
        self.state = SessionState::ChallengeReframe {
            submitting: Some(ticket),
        };
        self.last_error = None;
        self.touch();
        Ok((ticket, draft))
    }

    /// Applies a persistence result to the session waiting on `ticket`.
    pub fn complete_submission(
        &mut self,
        ticket: Ticket,
        outcome: Result<JournalEntry, JournalError>,
    ) -> SubmissionApplied {
        if self.state != (SessionState::ChallengeReframe { submitting: Some(ticket) }) {
            return SubmissionApplied::Discarded;
        }

        match outcome {
            Ok(entry) => {
                self.reset();
                SubmissionApplied::Submitted(entry)
            }
            Err(err) => {
                self.state = SessionState::ChallengeReframe { submitting: None };
                self.last_error = Some(err.message());
                self.touch();
                SubmissionApplied::Failed(err)
            }
        }
    }

    /// Abandons the session, discarding everything collected.
    ///
    /// Allowed from any state; in-flight results arriving afterwards are
    /// discarded.
    pub fn cancel(&mut self) {
        self.fields = SessionFields::default();
        self.suggestions = Suggestions::NotRequested;
        self.last_error = None;
        self.state = SessionState::Cancelled;
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn reset(&mut self) {
        self.fields = SessionFields::default();
        self.suggestions = Suggestions::NotRequested;
        self.last_error = None;
        self.state = SessionState::Situation;
        self.touch();
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        if self.is_cancelled() {
            return Err(SessionError::Cancelled);
        }
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        Ok(())
    }

    fn issue_ticket(&mut self) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
