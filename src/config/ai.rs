//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound accepted for `max_tokens`.
const MAX_TOKENS_LIMIT: u32 = 8192;

/// Anthropic settings for answering questions.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Anthropic API key; without one every question gets the degraded reply
    pub anthropic_api_key: Option<Secret<String>>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    pub system_prompt: Option<String>,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if Anthropic is configured
    pub fn has_anthropic(&self) -> bool {
        self.anthropic_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// The API key, or an empty string when unset.
    pub fn api_key(&self) -> String {
        self.anthropic_api_key
            .as_ref()
            .map(|k| k.expose_secret().clone())
            .unwrap_or_default()
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.has_anthropic() && !self.api_key().starts_with("sk-ant-") {
            return Err(ValidationError::InvalidAnthropicKey);
        }
        if self.max_tokens == 0 || self.max_tokens > MAX_TOKENS_LIMIT {
            return Err(ValidationError::InvalidMaxTokens(MAX_TOKENS_LIMIT));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if !self.base_url.starts_with("http") {
            return Err(ValidationError::InvalidUrl("ai.base_url"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
            system_prompt: None,
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_timeout() -> u64 {
    60
}
