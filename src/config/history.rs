//! Chat history configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Folder holding one JSON file per conversation
    #[serde(default = "default_folder")]
    pub folder: PathBuf,
}

impl HistoryConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.folder.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("HISTORY__FOLDER"));
        }
        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            folder: default_folder(),
        }
    }
}

fn default_folder() -> PathBuf {
    PathBuf::from("history")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_folder() {
        let config = HistoryConfig::default();
        assert_eq!(config.folder, PathBuf::from("history"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_folder_rejected() {
        let config = HistoryConfig {
            folder: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }
}
