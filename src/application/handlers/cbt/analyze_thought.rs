//! AnalyzeThoughtHandler - One-shot classification without a session.

use std::sync::Arc;

use crate::domain::cbt::{CbtError, ClassifierDiagnosis, ThoughtRecord};
use crate::ports::ThoughtClassifier;

#[derive(Debug, Clone)]
pub struct AnalyzeThoughtCommand {
    pub situation: String,
    pub emotion: String,
    pub thought: String,
}

/// Validates the triple and asks the classifier for a diagnosis.
///
/// Unlike the guided flow, a classification failure is returned to the
/// caller as an error.
pub struct AnalyzeThoughtHandler {
    classifier: Arc<dyn ThoughtClassifier>,
}

impl AnalyzeThoughtHandler {
    pub fn new(classifier: Arc<dyn ThoughtClassifier>) -> Self {
        Self { classifier }
    }

    pub async fn handle(&self, cmd: AnalyzeThoughtCommand) -> Result<ClassifierDiagnosis, CbtError> {
        let record = ThoughtRecord::new(&cmd.situation, &cmd.emotion, &cmd.thought)
            .map_err(CbtError::ValidationFailed)?;

        let diagnosis = self.classifier.classify(&record).await?;
        tracing::debug!(pattern = diagnosis.thought_pattern(), "thought analyzed");
        Ok(diagnosis)
    }

    pub fn is_configured(&self) -> bool {
        self.classifier.is_configured()
    }
}
