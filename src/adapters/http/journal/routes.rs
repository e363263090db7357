//! HTTP routes for journal endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_entry, get_entry, list_entries, update_entry, JournalHandlers};

/// Creates the journal router with all endpoints.
pub fn journal_routes(handlers: JournalHandlers) -> Router {
    Router::new()
        .route("/journal", post(create_entry).get(list_entries))
        .route("/journal/:id", get(get_entry).patch(update_entry))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRecordStore;
    use crate::application::handlers::journal::{
        CreateEntryHandler, GetEntryHandler, ListEntriesHandler, UpdateEntryHandler,
    };
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let store = Arc::new(InMemoryRecordStore::new());
        journal_routes(JournalHandlers::new(
            Arc::new(CreateEntryHandler::new(store.clone())),
            Arc::new(UpdateEntryHandler::new(store.clone())),
            Arc::new(GetEntryHandler::new(store.clone())),
            Arc::new(ListEntriesHandler::new(store)),
        ))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_returns_201_with_generated_fields() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/journal",
                json!({
                    "userId": 1,
                    "situation": "Presenting to my boss",
                    "emotion": "anxious",
                    "thought": "I will fail and everyone will judge me"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert!(body["createdAt"].is_string());
    }

    #[tokio::test]
    async fn create_with_short_fields_lists_every_issue() {
        let response = app()
            .oneshot(json_request("POST", "/journal", json!({ "userId": 1, "situation": "hi" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let fields: Vec<&str> = body["message"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["situation", "emotion", "thought"]);
    }

    #[tokio::test]
    async fn patch_with_foreign_key_is_rejected() {
        let response = app()
            .oneshot(json_request("PATCH", "/journal/1", json!({ "thought": "edited" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"][0]["field"], "thought");
    }

    #[tokio::test]
    async fn create_with_unknown_key_is_rejected() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/journal",
                json!({
                    "userId": 1,
                    "situation": "Presenting to my boss",
                    "emotion": "anxious",
                    "thought": "I will fail and everyone will judge me",
                    "mood": "sad"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"][0]["field"], "mood");
    }

    #[tokio::test]
    async fn repeated_user_id_is_a_json_400() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/journal?userId=1&userId=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["message"][0]["field"], "userId");
    }

    #[tokio::test]
    async fn list_without_user_id_is_400() {
        let response = app()
            .oneshot(Request::builder().uri("/journal").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_with_non_numeric_id_is_400_and_unknown_id_is_404() {
        let app = app();
        let bad = app
            .clone()
            .oneshot(Request::builder().uri("/journal/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let missing = app
            .oneshot(Request::builder().uri("/journal/77").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(missing).await["code"], "JOURNAL_ENTRY_NOT_FOUND");
    }
}
