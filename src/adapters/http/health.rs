//! Liveness endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    /// False when no classifier credential is configured and analysis
    /// requests will fail.
    pub classifier_configured: bool,
}

#[derive(Clone, Copy)]
struct HealthState {
    classifier_configured: bool,
}

/// GET /health
async fn health(State(state): State<HealthState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            classifier_configured: state.classifier_configured,
        }),
    )
}

pub fn health_routes(classifier_configured: bool) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(HealthState {
            classifier_configured,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn reports_classifier_state() {
        let response = health_routes(false)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["classifierConfigured"], false);
    }
}
