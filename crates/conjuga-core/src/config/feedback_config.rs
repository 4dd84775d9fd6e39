use serde::{Deserialize, Serialize};

use super::defaults;

/// Qualitative-feedback gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub enabled: bool,
    /// Base URL of the generative-language API.
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the API key. The key itself is never
    /// stored in config.
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_FEEDBACK_ENABLED,
            base_url: defaults::DEFAULT_FEEDBACK_BASE_URL.to_string(),
            model: defaults::DEFAULT_FEEDBACK_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_FEEDBACK_API_KEY_ENV.to_string(),
            timeout_secs: defaults::DEFAULT_FEEDBACK_TIMEOUT_SECS,
        }
    }
}
