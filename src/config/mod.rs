//! Application configuration module
//!
//! Configuration is loaded from environment variables with the `MINDWELL`
//! prefix; nested values use double underscores as separators. Every
//! setting has a default, so an empty environment yields a runnable
//! development server with classification disabled.
//!
//! # Example
//!
//! ```no_run
//! use mindwell::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod cbt;
mod error;
mod server;

pub use ai::AiConfig;
pub use cbt::CbtConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Thought classifier backend (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Guided session limits
    #[serde(default)]
    pub cbt: CbtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `MINDWELL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MINDWELL__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MINDWELL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.cbt.validate()?;
        // The analyzing wait has to end before the HTTP request times out.
        if self.cbt.analysis_timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::AnalysisOutlastsRequest);
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
