//! Guided CBT session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct CbtConfig {
    /// Longest a session may stay in the analyzing sub-state, in seconds
    #[serde(default = "default_analysis_timeout")]
    pub analysis_timeout_secs: u64,

    /// Open sessions allowed at once
    #[serde(default = "default_max_open_sessions")]
    pub max_open_sessions: usize,

    /// An open session untouched this long may be evicted, in seconds
    #[serde(default = "default_session_idle")]
    pub session_idle_secs: u64,
}

impl CbtConfig {
    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_secs(self.analysis_timeout_secs)
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.analysis_timeout_secs == 0 || self.analysis_timeout_secs > 300 {
            return Err(ValidationError::InvalidAnalysisTimeout);
        }
        if self.max_open_sessions == 0 {
            return Err(ValidationError::InvalidSessionLimit);
        }
        if self.session_idle_secs < self.analysis_timeout_secs {
            return Err(ValidationError::InvalidSessionIdle);
        }
        Ok(())
    }
}

impl Default for CbtConfig {
    fn default() -> Self {
        Self {
            analysis_timeout_secs: default_analysis_timeout(),
            max_open_sessions: default_max_open_sessions(),
            session_idle_secs: default_session_idle(),
        }
    }
}

fn default_analysis_timeout() -> u64 {
    25
}

fn default_max_open_sessions() -> usize {
    1000
}

fn default_session_idle() -> u64 {
    30 * 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CbtConfig::default();
        assert_eq!(config.analysis_timeout(), Duration::from_secs(25));
        assert_eq!(config.max_open_sessions, 1000);
        assert_eq!(config.session_idle(), Duration::from_secs(1800));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_values_are_rejected() {
        let config = CbtConfig {
            analysis_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidAnalysisTimeout));

        let config = CbtConfig {
            max_open_sessions: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSessionLimit));
    }

    #[test]
    fn idle_ttl_must_outlast_analysis() {
        let config = CbtConfig {
            session_idle_secs: 10,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSessionIdle));
    }
}
