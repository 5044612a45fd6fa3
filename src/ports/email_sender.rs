//! Email Sender Port - Outgoing plain-text email.

use async_trait::async_trait;

/// A single outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingEmail {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Email delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// Sending is not configured (no API key).
    #[error("email sending is not configured")]
    NotConfigured,

    /// The provider refused the message.
    #[error("email rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),
}

/// Port for sending email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends one email.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;
}
