//! Resend Email Sender - Implementation of EmailSender over Resend's HTTP API.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::ports::{EmailError, EmailSender, OutgoingEmail};

/// Configuration for the Resend sender.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    api_key: Option<Secret<String>>,
    /// `Name <address>` used as the sender.
    pub from: String,
    /// Base URL for the API (default: https://api.resend.com).
    pub base_url: String,
    pub timeout: Duration,
}

impl ResendConfig {
    /// An empty key leaves sending disabled; every send then fails.
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self {
            api_key: (!api_key.is_empty()).then(|| Secret::new(api_key)),
            from: from.into(),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Sends plain-text email through Resend.
pub struct ResendEmailSender {
    config: ResendConfig,
    client: Client,
}

impl ResendEmailSender {
    pub fn new(config: ResendConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let api_key = self.config.api_key.as_ref().ok_or(EmailError::NotConfigured)?;

        let body = ResendRequest {
            from: &self.config.from,
            to: [email.to.as_str()],
            subject: &email.subject,
            text: &email.body,
        };

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(to = %email.to, "Email sent");
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(EmailError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
