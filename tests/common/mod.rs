//! Shared harness for router-level tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use mindwell::adapters::ai::{LlmThoughtClassifier, MockAIProvider, MockError};
use mindwell::adapters::http::build_router;
use mindwell::adapters::memory::InMemoryRecordStore;
use mindwell::config::AppConfig;

pub fn catastrophizing_reply() -> String {
    json!({
        "thoughtPattern": "Catastrophizing",
        "patternExplanation": "Expecting the worst possible outcome from one presentation.",
        "challenge": "What evidence do you have that everyone will judge you?",
        "reframe": "I have prepared, and even if it is imperfect, one talk does not define me."
    })
    .to_string()
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryRecordStore>,
    pub provider: MockAIProvider,
}

impl TestApp {
    pub fn with_provider(provider: MockAIProvider) -> Self {
        let store = Arc::new(InMemoryRecordStore::new());
        let classifier = Arc::new(LlmThoughtClassifier::new(
            Arc::new(provider.clone()),
            Duration::from_secs(5),
        ));
        let router = build_router(store.clone(), classifier, &AppConfig::default());
        Self {
            router,
            store,
            provider,
        }
    }

    /// Provider answers every call with a catastrophizing diagnosis.
    pub fn answering(times: usize) -> Self {
        let provider = (0..times).fold(MockAIProvider::new(), |p, _| p.with_response(catastrophizing_reply()));
        Self::with_provider(provider)
    }

    pub fn failing() -> Self {
        Self::with_provider(MockAIProvider::new().with_error(MockError::Unavailable {
            message: "upstream down".to_string(),
        }))
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("PATCH", uri, Some(body)).await
    }
}
