//! Extra application launch commands
//!
//! `THAMBI__APPS__FILE_EXPLORER=nautilus` adds (or overrides) the app
//! spoken as "file explorer". Underscores in names stand for spaces.

use serde::Deserialize;
use std::collections::HashMap;

use super::error::ValidationError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AppsConfig(HashMap<String, String>);

impl AppsConfig {
    pub fn new(commands: HashMap<String, String>) -> Self {
        Self(commands)
    }

    /// Spoken name to command, names lower-cased with spaces restored.
    pub fn commands(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|(name, command)| {
                (
                    name.trim().to_lowercase().replace('_', " "),
                    command.trim().to_string(),
                )
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, command) in &self.0 {
            if name.trim().is_empty() || command.trim().is_empty() {
                return Err(ValidationError::InvalidAppName(name.clone()));
            }
        }
        Ok(())
    }
}
