//! Journal entry aggregate and its write-side value objects.

use crate::domain::foundation::{optional_text, required_text, EntryId, Timestamp, UserId, ValidationError};

/// Minimum length of the situation text.
pub const MIN_SITUATION_CHARS: usize = 5;
/// Minimum length of the emotion text.
pub const MIN_EMOTION_CHARS: usize = 2;
/// Minimum length of the automatic thought.
pub const MIN_THOUGHT_CHARS: usize = 5;
/// Upper bound on challenge and reframe text.
pub const MAX_SUGGESTION_CHARS: usize = 10_000;

/// A persisted CBT journal entry.
///
/// # Invariants
///
/// - `situation` and `thought` are at least 5 characters, `emotion` at least 2
/// - `created_at` never changes after creation
/// - only `challenge` and `reframe` are mutable, through [`JournalPatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    id: EntryId,
    user_id: UserId,
    situation: String,
    emotion: String,
    thought: String,
    challenge: Option<String>,
    reframe: Option<String>,
    created_at: Timestamp,
}

impl JournalEntry {
    /// Materializes a validated draft as a stored record.
    pub fn create(id: EntryId, draft: NewJournalEntry, created_at: Timestamp) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            situation: draft.situation,
            emotion: draft.emotion,
            thought: draft.thought,
            challenge: draft.challenge,
            reframe: draft.reframe,
            created_at,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn situation(&self) -> &str {
        &self.situation
    }

    pub fn emotion(&self) -> &str {
        &self.emotion
    }

    pub fn thought(&self) -> &str {
        &self.thought
    }

    pub fn challenge(&self) -> Option<&str> {
        self.challenge.as_deref()
    }

    pub fn reframe(&self) -> Option<&str> {
        self.reframe.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Merges a validated patch. Absent patch fields leave the entry as is.
    pub fn apply(&mut self, patch: &JournalPatch) {
        if let Some(challenge) = &patch.challenge {
            self.challenge = non_empty(challenge);
        }
        if let Some(reframe) = &patch.reframe {
            self.reframe = non_empty(reframe);
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Validated input for creating a journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalEntry {
    user_id: UserId,
    situation: String,
    emotion: String,
    thought: String,
    challenge: Option<String>,
    reframe: Option<String>,
}

impl NewJournalEntry {
    /// Validates every field and reports all problems at once.
    pub fn new(
        user_id: UserId,
        situation: &str,
        emotion: &str,
        thought: &str,
        challenge: Option<String>,
        reframe: Option<String>,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut issues = Vec::new();

        let situation = collect(&mut issues, required_text("situation", situation, MIN_SITUATION_CHARS));
        let emotion = collect(&mut issues, required_text("emotion", emotion, MIN_EMOTION_CHARS));
        let thought = collect(&mut issues, required_text("thought", thought, MIN_THOUGHT_CHARS));
        let challenge = optional_text(challenge);
        let reframe = optional_text(reframe);
        if let Err(e) = check_suggestion("challenge", challenge.as_deref()) {
            issues.push(e);
        }
        if let Err(e) = check_suggestion("reframe", reframe.as_deref()) {
            issues.push(e);
        }

        match (situation, emotion, thought) {
            (Some(situation), Some(emotion), Some(thought)) if issues.is_empty() => Ok(Self {
                user_id,
                situation,
                emotion,
                thought,
                challenge,
                reframe,
            }),
            _ => Err(issues),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn situation(&self) -> &str {
        &self.situation
    }

    pub fn emotion(&self) -> &str {
        &self.emotion
    }

    pub fn thought(&self) -> &str {
        &self.thought
    }

    pub fn challenge(&self) -> Option<&str> {
        self.challenge.as_deref()
    }

    pub fn reframe(&self) -> Option<&str> {
        self.reframe.as_deref()
    }
}

fn collect(issues: &mut Vec<ValidationError>, result: Result<String, ValidationError>) -> Option<String> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            issues.push(e);
            None
        }
    }
}

fn check_suggestion(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(text) if text.chars().count() > MAX_SUGGESTION_CHARS => Err(ValidationError::too_long(
            field,
            MAX_SUGGESTION_CHARS,
            text.chars().count(),
        )),
        _ => Ok(()),
    }
}

/// Partial update restricted to the two mutable fields.
///
/// `Some("")` clears a field, `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalPatch {
    challenge: Option<String>,
    reframe: Option<String>,
}

impl JournalPatch {
    pub fn new(challenge: Option<String>, reframe: Option<String>) -> Result<Self, Vec<ValidationError>> {
        let challenge = challenge.map(|c| c.trim().to_string());
        let reframe = reframe.map(|r| r.trim().to_string());

        let issues: Vec<ValidationError> = [
            check_suggestion("challenge", challenge.as_deref()),
            check_suggestion("reframe", reframe.as_deref()),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if issues.is_empty() {
            Ok(Self { challenge, reframe })
        } else {
            Err(issues)
        }
    }

    pub fn challenge(&self) -> Option<&str> {
        self.challenge.as_deref()
    }

    pub fn reframe(&self) -> Option<&str> {
        self.reframe.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.challenge.is_none() && self.reframe.is_none()
    }
}
