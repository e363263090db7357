//! Assembles every HTTP module into one application router.

use std::sync::Arc;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::adapters::memory::InMemoryRecordStore;
use crate::application::handlers::cbt::{AnalyzeThoughtHandler, GuidedSessionHandler, SessionRegistry};
use crate::application::handlers::journal::{
    CreateEntryHandler, GetEntryHandler, ListEntriesHandler, UpdateEntryHandler,
};
use crate::config::AppConfig;
use crate::ports::ThoughtClassifier;

use super::cbt::{cbt_routes, CbtHandlers};
use super::health::health_routes;
use super::journal::{journal_routes, JournalHandlers};
use super::records::{record_routes, RecordHandlers};

/// Builds the full router over one record store and one classifier.
pub fn build_router(
    store: Arc<InMemoryRecordStore>,
    classifier: Arc<dyn ThoughtClassifier>,
    config: &AppConfig,
) -> Router {
    let journal = JournalHandlers::new(
        Arc::new(CreateEntryHandler::new(store.clone())),
        Arc::new(UpdateEntryHandler::new(store.clone())),
        Arc::new(GetEntryHandler::new(store.clone())),
        Arc::new(ListEntriesHandler::new(store.clone())),
    );

    let analyze = Arc::new(AnalyzeThoughtHandler::new(classifier.clone()));
    let classifier_configured = analyze.is_configured();
    let sessions = Arc::new(GuidedSessionHandler::new(
        SessionRegistry::new(config.cbt.max_open_sessions, config.cbt.session_idle()),
        classifier,
        store.clone(),
        config.cbt.analysis_timeout(),
    ));

    let records = RecordHandlers::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
    );

    let app = Router::new()
        .merge(health_routes(classifier_configured))
        .merge(journal_routes(journal))
        .merge(cbt_routes(CbtHandlers::new(analyze, sessions)))
        .merge(record_routes(records));

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.server.request_timeout()))
            .layer(cors_layer(config)),
    )
}

/// Configured origins only; any origin in development when none are set.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    if !origins.is_empty() {
        layer.allow_origin(origins)
    } else if config.is_production() {
        layer
    } else {
        layer.allow_origin(tower_http::cors::Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::UnconfiguredClassifier;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(
            Arc::new(InMemoryRecordStore::new()),
            Arc::new(UnconfiguredClassifier),
            &AppConfig::default(),
        )
    }

    #[tokio::test]
    async fn every_module_is_mounted() {
        for uri in ["/health", "/journal?userId=1", "/thought-patterns", "/meditations", "/moods?userId=1"] {
            let response = app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
