//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("server.request_timeout_secs must be between 1 and 300")]
    InvalidTimeout,

    #[error("ai.timeout_secs must be between 1 and 120")]
    InvalidAiTimeout,

    #[error("ai.temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("ai.base_url must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("cbt.analysis_timeout_secs must be between 1 and 300")]
    InvalidAnalysisTimeout,

    #[error("cbt.max_open_sessions must be at least 1")]
    InvalidSessionLimit,

    #[error("cbt.session_idle_secs must not be shorter than cbt.analysis_timeout_secs")]
    InvalidSessionIdle,

    #[error("cbt.analysis_timeout_secs must be shorter than server.request_timeout_secs")]
    AnalysisOutlastsRequest,
}
