//! Classifier input and output value objects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{required_text, ValidationError};
use crate::domain::journal::{MIN_EMOTION_CHARS, MIN_SITUATION_CHARS, MIN_THOUGHT_CHARS};

/// The situation / emotion / thought triple sent for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThoughtRecord {
    situation: String,
    emotion: String,
    thought: String,
}

impl ThoughtRecord {
    /// Validates the triple with the same rules journal entries use.
    pub fn new(situation: &str, emotion: &str, thought: &str) -> Result<Self, Vec<ValidationError>> {
        match (
            required_text("situation", situation, MIN_SITUATION_CHARS),
            required_text("emotion", emotion, MIN_EMOTION_CHARS),
            required_text("thought", thought, MIN_THOUGHT_CHARS),
        ) {
            (Ok(situation), Ok(emotion), Ok(thought)) => Ok(Self {
                situation,
                emotion,
                thought,
            }),
            (s, e, t) => Err([s.err(), e.err(), t.err()].into_iter().flatten().collect()),
        }
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
}

/// Structured verdict from the thought-pattern classifier.
///
/// All four fields are present and non-empty, or there is no diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierDiagnosis {
    thought_pattern: String,
    pattern_explanation: String,
    challenge: String,
    reframe: String,
}

impl ClassifierDiagnosis {
    pub fn new(
        thought_pattern: &str,
        pattern_explanation: &str,
        challenge: &str,
        reframe: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            thought_pattern: required_text("thoughtPattern", thought_pattern, 1)?,
            pattern_explanation: required_text("patternExplanation", pattern_explanation, 1)?,
            challenge: required_text("challenge", challenge, 1)?,
            reframe: required_text("reframe", reframe, 1)?,
        })
    }

    pub fn thought_pattern(&self) -> &str {
        &self.thought_pattern
    }

    pub fn pattern_explanation(&self) -> &str {
        &self.pattern_explanation
    }

    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    pub fn reframe(&self) -> &str {
        &self.reframe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thought_record_accepts_valid_triple() {
        let record = ThoughtRecord::new(
            "Presenting to my boss",
            "anxious",
            "I will fail and everyone will judge me",
        )
        .unwrap();
        assert_eq!(record.emotion(), "anxious");
    }

    #[test]
    fn thought_record_collects_all_issues() {
        let issues = ThoughtRecord::new("", "a", "bad").unwrap_err();
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn diagnosis_requires_every_field() {
        assert!(ClassifierDiagnosis::new("Catastrophizing", "", "Q?", "R").is_err());
        assert!(ClassifierDiagnosis::new("Catastrophizing", "why", "Q?", "R").is_ok());
    }

    #[test]
    fn diagnosis_serializes_camel_case() {
        let d = ClassifierDiagnosis::new("Mind Reading", "Assumes others' thoughts", "Q?", "R").unwrap();
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["thoughtPattern"], "Mind Reading");
        assert_eq!(json["patternExplanation"], "Assumes others' thoughts");
    }
}
