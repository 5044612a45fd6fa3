//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `THAMBI` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a runnable
//! server; tasks whose credentials are missing answer with their failure
//! reply instead.
//!
//! # Example
//!
//! ```no_run
//! use thambi::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod apps;
mod desktop;
mod email;
mod error;
mod files;
mod history;
mod server;
mod shopping;

pub use ai::AiConfig;
pub use apps::AppsConfig;
pub use desktop::{parse_point, DesktopConfig};
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use files::FilesConfig;
pub use history::HistoryConfig;
pub use server::{Environment, ServerConfig};
pub use shopping::{parse_selector, SelectorKind, ShoppingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Question answering (Anthropic)
    #[serde(default)]
    pub ai: AiConfig,

    /// Email configuration (Resend)
    #[serde(default)]
    pub email: EmailConfig,

    /// Add-to-cart browser flow (WebDriver)
    #[serde(default)]
    pub shopping: ShoppingConfig,

    /// WhatsApp desktop automation
    #[serde(default)]
    pub desktop: DesktopConfig,

    /// Extra launchable applications
    #[serde(default)]
    pub apps: AppsConfig,

    /// File search roots
    #[serde(default)]
    pub files: FilesConfig,

    /// Transcript folder
    #[serde(default)]
    pub history: HistoryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `THAMBI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `THAMBI__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `THAMBI__AI__ANTHROPIC_API_KEY=...` -> `ai.anthropic_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("THAMBI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.email.validate()?;
        self.shopping.validate()?;
        self.desktop.validate()?;
        self.apps.validate()?;
        self.files.validate()?;
        self.history.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
