//! LLM-backed thought classifier.
//!
//! Sends one completion request asking the model to rate the thought and
//! answer with a fixed four-field JSON object. Anything other than a
//! complete, parseable answer within the time limit is a
//! [`ClassificationFailed`].

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::cbt::{ClassificationFailed, ClassifierDiagnosis, ThoughtRecord};
use crate::ports::{
    AIProvider, CompletionRequest, CompletionResponse, MessageRole, RequestMetadata,
    ThoughtClassifier,
};

const SYSTEM_PROMPT: &str = r#"You are a cognitive behavioral therapy rater. Given a situation, the emotion it caused and the automatic thought behind it, identify the single cognitive distortion the thought best matches (for example Catastrophizing, Mind Reading, All-or-Nothing Thinking, Overgeneralization, Should Statements, Labeling, Personalization, Emotional Reasoning, Fortune Telling).

Respond with only a JSON object of this exact shape:
{
  "thoughtPattern": "name of the distortion",
  "patternExplanation": "one or two sentences on why the thought matches it",
  "challenge": "one evidence-based question that challenges the thought",
  "reframe": "a balanced alternative thought written in the first person"
}"#;

const MAX_RESPONSE_TOKENS: u32 = 600;

/// Classifier that delegates to an [`AIProvider`].
pub struct LlmThoughtClassifier {
    provider: Arc<dyn AIProvider>,
    timeout: Duration,
    temperature: f32,
}

impl LlmThoughtClassifier {
    pub fn new(provider: Arc<dyn AIProvider>, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            temperature: 0.3,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn build_request(&self, record: &ThoughtRecord) -> CompletionRequest {
        let prompt = format!(
            "Situation: {}\nEmotion: {}\nThought: {}",
            record.situation(),
            record.emotion(),
            record.thought()
        );

        CompletionRequest::new(RequestMetadata::new(
            "classify_thought",
            uuid::Uuid::new_v4().to_string(),
        ))
        .with_system_prompt(SYSTEM_PROMPT)
        .with_message(MessageRole::User, prompt)
        .with_max_tokens(MAX_RESPONSE_TOKENS)
        .with_temperature(self.temperature)
        .with_json_response()
    }
}

#[async_trait]
impl ThoughtClassifier for LlmThoughtClassifier {
    async fn classify(&self, record: &ThoughtRecord) -> Result<ClassifierDiagnosis, ClassificationFailed> {
        let request = self.build_request(record);
        let trace_id = request.metadata.trace_id.clone();

        let outcome = match tokio::time::timeout(self.timeout, self.provider.complete(request)).await {
            Err(_) => Err(ClassificationFailed::timed_out(self.timeout.as_secs())),
            Ok(Err(e)) => Err(ClassificationFailed::new(e.to_string())),
            Ok(Ok(response)) => diagnosis_from(&response),
        };

        match &outcome {
            Ok(diagnosis) => tracing::debug!(
                trace_id = %trace_id,
                pattern = diagnosis.thought_pattern(),
                "thought classified"
            ),
            Err(e) => tracing::warn!(trace_id = %trace_id, reason = e.reason(), "thought classification failed"),
        }
        outcome
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDiagnosis {
    thought_pattern: String,
    pattern_explanation: String,
    challenge: String,
    reframe: String,
}

/// A truncated or filtered answer is a failure even if it happens to parse.
fn diagnosis_from(response: &CompletionResponse) -> Result<ClassifierDiagnosis, ClassificationFailed> {
    if !response.finish_reason.is_complete() {
        return Err(ClassificationFailed::new(format!(
            "{} stopped early: {:?}",
            response.model, response.finish_reason
        )));
    }
    parse_diagnosis(&response.content)
}

/// Parses the model's answer, tolerating a surrounding markdown code fence.
fn parse_diagnosis(content: &str) -> Result<ClassifierDiagnosis, ClassificationFailed> {
    let json = strip_code_fence(content);
    let raw: RawDiagnosis = serde_json::from_str(json)
        .map_err(|e| ClassificationFailed::new(format!("unparseable classifier output: {}", e)))?;

    ClassifierDiagnosis::new(
        &raw.thought_pattern,
        &raw.pattern_explanation,
        &raw.challenge,
        &raw.reframe,
    )
    .map_err(|e| ClassificationFailed::new(format!("incomplete classifier output: {}", e)))
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.strip_prefix("json").unwrap_or(rest);
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Stand-in used when no credential is configured. Every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredClassifier;

#[async_trait]
impl ThoughtClassifier for UnconfiguredClassifier {
    async fn classify(&self, _record: &ThoughtRecord) -> Result<ClassifierDiagnosis, ClassificationFailed> {
        let err = ClassificationFailed::not_configured();
        tracing::warn!(reason = err.reason(), "thought classification failed");
        Err(err)
    }

    fn is_configured(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::ports::FinishReason;

    const VALID: &str = r#"{
        "thoughtPattern": "Catastrophizing",
        "patternExplanation": "You expect the worst possible outcome.",
        "challenge": "What evidence do you have that you will fail?",
        "reframe": "I have prepared, and one presentation does not define me."
    }"#;

    fn record() -> ThoughtRecord {
        ThoughtRecord::new(
            "Presenting to my boss",
            "anxious",
            "I will fail and everyone will judge me",
        )
        .unwrap()
    }

    fn classifier(provider: MockAIProvider) -> LlmThoughtClassifier {
        LlmThoughtClassifier::new(Arc::new(provider), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn parses_valid_diagnosis() {
        let diagnosis = classifier(MockAIProvider::new().with_response(VALID))
            .classify(&record())
            .await
            .unwrap();

        assert_eq!(diagnosis.thought_pattern(), "Catastrophizing");
        assert!(!diagnosis.challenge().is_empty());
        assert!(!diagnosis.reframe().is_empty());
    }

    #[tokio::test]
    async fn sends_triple_and_requests_json() {
        let provider = MockAIProvider::new().with_response(VALID);
        classifier(provider.clone()).classify(&record()).await.unwrap();

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].json_response);
        let prompt = &calls[0].messages[0].content;
        assert!(prompt.contains("Presenting to my boss"));
        assert!(prompt.contains("anxious"));
        assert!(prompt.contains("I will fail"));
    }

    #[tokio::test]
    async fn accepts_fenced_json() {
        let fenced = format!("```json\n{}\n```", VALID);
        let result = classifier(MockAIProvider::new().with_response(fenced))
            .classify(&record())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn malformed_output_fails() {
        let result = classifier(MockAIProvider::new().with_response("I think it's catastrophizing"))
            .classify(&record())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_field_fails_as_a_unit() {
        let partial = r#"{"thoughtPattern":"Labeling","patternExplanation":"x","challenge":"y"}"#;
        let result = classifier(MockAIProvider::new().with_response(partial))
            .classify(&record())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn empty_field_fails_as_a_unit() {
        let blank = r#"{"thoughtPattern":"Labeling","patternExplanation":"x","challenge":"y","reframe":"  "}"#;
        let result = classifier(MockAIProvider::new().with_response(blank))
            .classify(&record())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn truncated_answer_fails_even_when_it_parses() {
        let provider = MockAIProvider::new().with_unfinished_response(VALID, FinishReason::Length);
        let err = classifier(provider).classify(&record()).await.unwrap_err();
        assert!(err.reason().contains("Length"));
    }

    #[tokio::test]
    async fn filtered_answer_fails() {
        let provider = MockAIProvider::new().with_unfinished_response("", FinishReason::ContentFilter);
        let err = classifier(provider).classify(&record()).await.unwrap_err();
        assert!(err.reason().contains("ContentFilter"));
    }

    #[tokio::test]
    async fn provider_error_fails_without_retry() {
        let provider = MockAIProvider::new().with_error(MockError::Network {
            message: "connection reset".into(),
        });
        let err = classifier(provider.clone()).classify(&record()).await.unwrap_err();

        assert_eq!(err.to_string(), "thought classification failed");
        assert!(err.reason().contains("connection reset"));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_provider_times_out() {
        let provider = MockAIProvider::new()
            .with_response(VALID)
            .with_delay(Duration::from_secs(60));
        let err = LlmThoughtClassifier::new(Arc::new(provider), Duration::from_secs(2))
            .classify(&record())
            .await
            .unwrap_err();
        assert!(err.reason().contains("2s"));
    }

    #[tokio::test]
    async fn unconfigured_classifier_always_fails() {
        let c = UnconfiguredClassifier;
        assert!(!c.is_configured());
        assert!(c.classify(&record()).await.is_err());
    }

    #[test]
    fn strip_code_fence_handles_plain_and_fenced() {
        assert_eq!(strip_code_fence("  {}  "), "{}");
        assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
    }
}
