//! Mood log records.

use crate::domain::foundation::{bounded_text, optional_text, MoodId, Timestamp, UserId, ValidationError};

pub const MIN_INTENSITY: i64 = 1;
pub const MAX_INTENSITY: i64 = 10;
const MAX_MOOD_CHARS: usize = 50;
const MAX_NOTE_CHARS: usize = 2_000;

/// One mood check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mood {
    id: MoodId,
    user_id: UserId,
    mood: String,
    intensity: u8,
    note: Option<String>,
    created_at: Timestamp,
}

impl Mood {
    pub fn create(id: MoodId, draft: NewMood, created_at: Timestamp) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            mood: draft.mood,
            intensity: draft.intensity,
            note: draft.note,
            created_at,
        }
    }

    pub fn id(&self) -> MoodId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Validated input for logging a mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMood {
    user_id: UserId,
    mood: String,
    intensity: u8,
    note: Option<String>,
}

impl NewMood {
    pub fn new(
        user_id: UserId,
        mood: &str,
        intensity: i64,
        note: Option<String>,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut issues = Vec::new();

        let mood = bounded_text("mood", mood, 1, MAX_MOOD_CHARS).map_err(|e| issues.push(e)).ok();
        if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
            issues.push(ValidationError::out_of_range(
                "intensity",
                MIN_INTENSITY,
                MAX_INTENSITY,
                intensity,
            ));
        }
        let note = optional_text(note);
        if let Some(len) = note.as_ref().map(|n| n.chars().count()) {
            if len > MAX_NOTE_CHARS {
                issues.push(ValidationError::too_long("note", MAX_NOTE_CHARS, len));
            }
        }

        match mood {
            Some(mood) if issues.is_empty() => Ok(Self {
                user_id,
                mood,
                intensity: intensity as u8,
                note,
            }),
            _ => Err(issues),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
