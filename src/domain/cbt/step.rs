//! Steps of the guided CBT journaling flow.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;
use crate::domain::journal::{MIN_EMOTION_CHARS, MIN_SITUATION_CHARS, MIN_THOUGHT_CHARS};

/// One screen of the wizard.
///
/// Steps run strictly forward `Situation → Emotion → Thought →
/// ChallengeReframe`; stepping back to the immediate predecessor is
/// always allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CbtStep {
    #[default]
    Situation,
    Emotion,
    Thought,
    ChallengeReframe,
}

impl CbtStep {
    /// The step after this one, if any.
    pub fn next(&self) -> Option<CbtStep> {
        match self {
            CbtStep::Situation => Some(CbtStep::Emotion),
            CbtStep::Emotion => Some(CbtStep::Thought),
            CbtStep::Thought => Some(CbtStep::ChallengeReframe),
            CbtStep::ChallengeReframe => None,
        }
    }

    /// The step before this one, if any.
    pub fn previous(&self) -> Option<CbtStep> {
        match self {
            CbtStep::Situation => None,
            CbtStep::Emotion => Some(CbtStep::Situation),
            CbtStep::Thought => Some(CbtStep::Emotion),
            CbtStep::ChallengeReframe => Some(CbtStep::Thought),
        }
    }

    /// Field collected on this step, and its minimum length.
    pub fn required_field(&self) -> Option<(&'static str, usize)> {
        match self {
            CbtStep::Situation => Some(("situation", MIN_SITUATION_CHARS)),
            CbtStep::Emotion => Some(("emotion", MIN_EMOTION_CHARS)),
            CbtStep::Thought => Some(("thought", MIN_THOUGHT_CHARS)),
            CbtStep::ChallengeReframe => None,
        }
    }

    /// Zero-based position, for progress display.
    pub fn index(&self) -> usize {
        match self {
            CbtStep::Situation => 0,
            CbtStep::Emotion => 1,
            CbtStep::Thought => 2,
            CbtStep::ChallengeReframe => 3,
        }
    }
}

impl StateMachine for CbtStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target) || self.previous() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.previous().into_iter().chain(self.next()).collect()
    }
}
