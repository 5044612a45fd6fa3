//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid Anthropic API key format")]
    InvalidAnthropicKey,

    #[error("max_tokens must be between 1 and {0}")]
    InvalidMaxTokens(u32),

    #[error("Invalid Resend API key format")]
    InvalidResendKey,

    #[error("Invalid from email address")]
    InvalidFromEmail,

    #[error("Invalid URL for {0}")]
    InvalidUrl(&'static str),

    #[error("Invalid call button position: {0}")]
    InvalidButtonPosition(String),

    #[error("App name must be lower-case and non-empty: '{0}'")]
    InvalidAppName(String),

    #[error("File preview count must be at least 1")]
    InvalidPreviewCount,
}
