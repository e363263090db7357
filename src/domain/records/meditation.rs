//! Guided meditation catalog and completion records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    MeditationCompletionId, MeditationId, Timestamp, UserId, ValidationError,
};

const MAX_SESSION_SECS: i64 = 4 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeditationCategory {
    Meditation,
    Breathing,
}

/// A catalog entry. The catalog is seeded at start-up and read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meditation {
    id: MeditationId,
    title: String,
    description: String,
    duration_minutes: u32,
    category: MeditationCategory,
}

impl Meditation {
    pub fn new(
        id: MeditationId,
        title: impl Into<String>,
        description: impl Into<String>,
        duration_minutes: u32,
        category: MeditationCategory,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            duration_minutes,
            category,
        }
    }

    pub fn id(&self) -> MeditationId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn category(&self) -> MeditationCategory {
        self.category
    }
}

/// Catalog loaded into every fresh record store, in id order.
pub fn seed_catalog() -> Vec<(&'static str, &'static str, u32, MeditationCategory)> {
    let (meditation, breathing) = (MeditationCategory::Meditation, MeditationCategory::Breathing);
    vec![
        ("Body Scan", "Move attention slowly from head to toe, noticing without judging.", 10, meditation),
        ("Loving Kindness", "Offer warm wishes to yourself, someone close and someone difficult.", 12, meditation),
        ("Mindful Morning", "A short grounding practice to set an intention for the day.", 5, meditation),
        ("Sleep Wind-Down", "Release the day's tension before bed.", 15, meditation),
        ("Box Breathing", "Inhale, hold, exhale and hold again for four counts each.", 4, breathing),
        ("4-7-8 Breathing", "Inhale for four, hold for seven, exhale for eight.", 3, breathing),
        ("Calming Breath", "Lengthen each exhale to settle the nervous system.", 5, breathing),
    ]
}

/// A finished meditation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeditationCompletion {
    id: MeditationCompletionId,
    user_id: UserId,
    meditation_id: MeditationId,
    duration_seconds: u32,
    completed_at: Timestamp,
}

impl MeditationCompletion {
    pub fn create(id: MeditationCompletionId, draft: NewMeditationCompletion, completed_at: Timestamp) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            meditation_id: draft.meditation_id,
            duration_seconds: draft.duration_seconds,
            completed_at,
        }
    }

    pub fn id(&self) -> MeditationCompletionId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn meditation_id(&self) -> MeditationId {
        self.meditation_id
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn completed_at(&self) -> &Timestamp {
        &self.completed_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeditationCompletion {
    user_id: UserId,
    meditation_id: MeditationId,
    duration_seconds: u32,
}

impl NewMeditationCompletion {
    pub fn new(
        user_id: UserId,
        meditation_id: MeditationId,
        duration_seconds: i64,
    ) -> Result<Self, ValidationError> {
        if !(1..=MAX_SESSION_SECS).contains(&duration_seconds) {
            return Err(ValidationError::out_of_range(
                "durationSeconds",
                1,
                MAX_SESSION_SECS,
                duration_seconds,
            ));
        }
        Ok(Self {
            user_id,
            meditation_id,
            duration_seconds: duration_seconds as u32,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn meditation_id(&self) -> MeditationId {
        self.meditation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_both_categories() {
        let catalog = seed_catalog();
        assert!(catalog.iter().any(|m| m.3 == MeditationCategory::Meditation));
        assert!(catalog.iter().any(|m| m.3 == MeditationCategory::Breathing));
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MeditationCategory::Breathing).unwrap(),
            "\"breathing\""
        );
    }

    #[test]
    fn completion_duration_must_be_positive() {
        assert!(NewMeditationCompletion::new(UserId::new(1), MeditationId::new(1), 0).is_err());
        assert!(NewMeditationCompletion::new(UserId::new(1), MeditationId::new(1), 300).is_ok());
    }
}
