//! Thought classifier port.
//!
//! Turns a situation / emotion / thought triple into a [`ClassifierDiagnosis`].
//! Every failure (unreachable service, timeout, unparseable output, missing
//! credential) collapses into one [`ClassificationFailed`]. Implementations
//! do not retry.

use async_trait::async_trait;

use crate::domain::cbt::{ClassificationFailed, ClassifierDiagnosis, ThoughtRecord};

#[async_trait]
pub trait ThoughtClassifier: Send + Sync {
    /// Classify one thought. The output is advisory and may differ between calls.
    async fn classify(&self, record: &ThoughtRecord) -> Result<ClassifierDiagnosis, ClassificationFailed>;

    /// Whether this classifier can ever succeed.
    fn is_configured(&self) -> bool {
        true
    }
}
