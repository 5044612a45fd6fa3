//! Email configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key; without one sending always fails
    pub resend_api_key: Option<Secret<String>>,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// The API key, or an empty string when unset.
    pub fn api_key(&self) -> String {
        self.resend_api_key
            .as_ref()
            .map(|k| k.expose_secret().clone())
            .unwrap_or_default()
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let key = self.api_key();
        if !key.is_empty() && !key.starts_with("re_") {
            return Err(ValidationError::InvalidResendKey);
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !self.base_url.starts_with("http") {
            return Err(ValidationError::InvalidUrl("email.base_url"));
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
            base_url: default_base_url(),
        }
    }
}

fn default_from_email() -> String {
    "thambi@localhost.localdomain".to_string()
}

fn default_from_name() -> String {
    "Thambi".to_string()
}

fn default_base_url() -> String {
    "https://api.resend.com".to_string()
}
