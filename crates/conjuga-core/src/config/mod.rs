//! Layered TOML configuration. Every section falls back to
//! [`defaults`] for fields it does not set.

pub mod defaults;
mod feedback_config;
mod observability_config;
mod session_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use feedback_config::FeedbackConfig;
pub use observability_config::ObservabilityConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

use crate::errors::{ConjugaError, ConjugaResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConjugaConfig {
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub feedback: FeedbackConfig,
    pub observability: ObservabilityConfig,
}

impl ConjugaConfig {
    /// Parse and validate a TOML document. An empty document yields defaults.
    pub fn from_toml(source: &str) -> ConjugaResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConjugaError::ConfigError {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> ConjugaResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| ConjugaError::ConfigError {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml(&source)
    }

    /// Reject values the engine cannot operate with.
    pub fn validate(&self) -> ConjugaResult<()> {
        if self.session.batch_size == 0 {
            return Err(ConjugaError::ConfigError {
                reason: "session.batch_size must be at least 1".into(),
            });
        }
        if self.feedback.timeout_secs == 0 {
            return Err(ConjugaError::ConfigError {
                reason: "feedback.timeout_secs must be at least 1".into(),
            });
        }
        Ok(())
    }
}
