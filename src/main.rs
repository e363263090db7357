use std::sync::Arc;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use mindwell::adapters::ai::{LlmThoughtClassifier, OpenAIConfig, OpenAIProvider, UnconfiguredClassifier};
use mindwell::adapters::http::build_router;
use mindwell::adapters::memory::InMemoryRecordStore;
use mindwell::config::{AiConfig, AppConfig};
use mindwell::ports::ThoughtClassifier;

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    setup_tracing(&config);

    let addr = config.server.socket_addr().expect("Invalid listen address");
    let classifier = build_classifier(&config.ai);
    let store = Arc::new(InMemoryRecordStore::new());
    let app = build_router(store, classifier, &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(%addr, environment = ?config.server.environment, "mindwell listening");

    if let Err(error) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%error, "server terminated");
    }
}

/// `RUST_LOG` wins over the configured level; production logs are JSON.
fn setup_tracing(config: &AppConfig) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .try_from_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let fmt_layer = if config.is_production() {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry().with(fmt_layer).with(filter).init();
}

fn build_classifier(ai: &AiConfig) -> Arc<dyn ThoughtClassifier> {
    let Some(key) = ai.openai_key() else {
        tracing::error!("no OpenAI API key configured; thought analysis will fail until one is set");
        return Arc::new(UnconfiguredClassifier);
    };

    let provider_config = OpenAIConfig::new(key)
        .with_model(ai.model.clone())
        .with_base_url(ai.base_url.clone())
        .with_timeout(ai.timeout());

    match OpenAIProvider::new(provider_config) {
        Ok(provider) => {
            tracing::info!(model = %ai.model, "thought classifier ready");
            Arc::new(LlmThoughtClassifier::new(Arc::new(provider), ai.timeout()).with_temperature(ai.temperature))
        }
        Err(error) => {
            tracing::error!(%error, "failed to build OpenAI client; thought analysis disabled");
            Arc::new(UnconfiguredClassifier)
        }
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
