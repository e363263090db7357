//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key. Without it, thought classification is disabled.
    pub openai_api_key: Option<Secret<String>>,

    /// Chat model used for classification
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound on one classification call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The API key, if one is set and non-empty
    pub fn openai_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.trim().is_empty())
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_key().is_some()
    }

    /// Validate AI configuration. A missing key is not an error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            temperature: default_temperature(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    20
}

fn default_temperature() -> f32 {
    0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_secs, 20);
        assert!(!config.has_openai());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = AiConfig {
            openai_api_key: Some(Secret::new("  ".to_string())),
            ..Default::default()
        };
        assert!(!config.has_openai());
    }

    #[test]
    fn test_key_is_redacted_in_debug() {
        let config = AiConfig {
            openai_api_key: Some(Secret::new("sk-live-123".to_string())),
            ..Default::default()
        };
        assert!(config.has_openai());
        assert!(!format!("{:?}", config).contains("sk-live-123"));
    }

    #[test]
    fn test_validation_bounds() {
        let too_slow = AiConfig {
            timeout_secs: 121,
            ..Default::default()
        };
        assert_eq!(too_slow.validate(), Err(ValidationError::InvalidAiTimeout));

        let too_hot = AiConfig {
            temperature: 3.5,
            ..Default::default()
        };
        assert_eq!(too_hot.validate(), Err(ValidationError::InvalidTemperature));

        let bad_url = AiConfig {
            base_url: "api.openai.com".to_string(),
            ..Default::default()
        };
        assert_eq!(bad_url.validate(), Err(ValidationError::InvalidBaseUrl));
    }
}
