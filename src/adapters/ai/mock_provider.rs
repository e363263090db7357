//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response(r#"{"thoughtPattern":"Catastrophizing", ...}"#)
//!     .with_delay(Duration::from_millis(100));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason,
};

const MOCK_MODEL: &str = "mock-model-1";

/// Mock AI provider for testing.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success { content: String, finish_reason: FinishReason },
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Poisoning only happens if a test panicked mid-call; the data is still usable.
fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        locked(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
            finish_reason: FinishReason::Stop,
        });
        self
    }

    /// Adds a response cut short for the given reason.
    pub fn with_unfinished_response(self, content: impl Into<String>, finish_reason: FinishReason) -> Self {
        locked(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
            finish_reason,
        });
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        locked(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        locked(&self.calls).clone()
    }

    fn next_response(&self) -> MockResponse {
        locked(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: "Mock response".to_string(),
                finish_reason: FinishReason::Stop,
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        locked(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success { content, finish_reason } => Ok(CompletionResponse {
                content,
                model: MOCK_MODEL.to_string(),
                finish_reason,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MessageRole, RequestMetadata};

    fn test_request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new("test", "trace-123"))
            .with_message(MessageRole::User, "Hello")
    }

    #[tokio::test]
    async fn returns_configured_responses_in_order() {
        let provider = MockAIProvider::new().with_response("first").with_response("second");

        assert_eq!(provider.complete(test_request()).await.unwrap().content, "first");
        assert_eq!(provider.complete(test_request()).await.unwrap().content, "second");
        assert_eq!(provider.complete(test_request()).await.unwrap().content, "Mock response");
    }

    #[tokio::test]
    async fn returns_configured_error() {
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "down".into(),
        });

        let err = provider.complete(test_request()).await.unwrap_err();
        assert!(matches!(err, AIError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn unfinished_response_reports_its_reason() {
        let provider = MockAIProvider::new().with_unfinished_response("{\"thought", FinishReason::Length);
        let response = provider.complete(test_request()).await.unwrap();
        assert_eq!(response.finish_reason, FinishReason::Length);
        assert_eq!(response.model, "mock-model-1");
    }

    #[tokio::test]
    async fn tracks_calls() {
        let provider = MockAIProvider::new();
        provider.complete(test_request()).await.unwrap();
        provider.complete(test_request()).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.get_calls()[0].messages[0].content, "Hello");
    }

    #[tokio::test(start_paused = true)]
    async fn applies_delay() {
        let provider = MockAIProvider::new().with_delay(Duration::from_secs(5));
        let started = tokio::time::Instant::now();
        provider.complete(test_request()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(5));
    }

    #[test]
    fn clones_share_state() {
        let provider = MockAIProvider::new();
        let clone = provider.clone().with_response("queued via clone");
        assert!(matches!(
            provider.next_response(),
            MockResponse::Success { ref content, .. } if content == "queued via clone"
        ));
        drop(clone);
    }
}
