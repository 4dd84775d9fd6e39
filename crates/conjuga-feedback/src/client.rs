//! GeminiGateway: blocking HTTP client for critiques.

use std::time::Duration;

use conjuga_core::config::FeedbackConfig;
use conjuga_core::errors::GatewayError;
use conjuga_core::models::Critique;
use conjuga_core::traits::IFeedbackGateway;

use crate::parse::parse_generate_response;
use crate::prompt::build_prompt;
use crate::wire::GenerateRequest;

/// Resolved connection settings. The API key is read once at construction.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Resolve `config`, reading the key from its environment variable.
    pub fn from_feedback_config(config: &FeedbackConfig) -> Result<Self, GatewayError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GatewayError::NotConfigured {
                reason: format!("environment variable {} is not set", config.api_key_env),
            })?;
        Ok(Self::with_api_key(config, api_key))
    }

    pub fn with_api_key(config: &FeedbackConfig, api_key: impl Into<String>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

fn unavailable(reason: String) -> GatewayError {
    GatewayError::Unavailable { reason }
}

/// Map a non-success HTTP status to a gateway error.
pub fn status_error(status: u16, retry_after: Option<&str>, body: &str) -> GatewayError {
    match status {
        429 => GatewayError::RateLimited {
            retry_after_secs: retry_after.and_then(|v| v.trim().parse().ok()),
        },
        401 | 403 => GatewayError::NotConfigured {
            reason: format!("HTTP {status}: API key rejected"),
        },
        _ => unavailable(format!("HTTP {status}: {}", body.chars().take(200).collect::<String>())),
    }
}

#[derive(Debug)]
pub struct GeminiGateway {
    config: GeminiConfig,
    client: reqwest::blocking::Client,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| unavailable(e.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn from_feedback_config(config: &FeedbackConfig) -> Result<Self, GatewayError> {
        Self::new(GeminiConfig::from_feedback_config(config)?)
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

impl IFeedbackGateway for GeminiGateway {
    fn critique(&self, sentence: &str, target_form: &str) -> Result<Critique, GatewayError> {
        let prompt = build_prompt(sentence, target_form);
        let request = GenerateRequest::json_prompt(&prompt);

        tracing::debug!(model = %self.config.model, "requesting sentence critique");
        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .map_err(|e| unavailable(e.to_string()))?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().map_err(|e| unavailable(e.to_string()))?;

        if !status.is_success() {
            let err = status_error(status.as_u16(), retry_after.as_deref(), &body);
            tracing::warn!(status = status.as_u16(), error = %err, "critique request failed");
            return Err(err);
        }

        parse_generate_response(&body)
    }
}
