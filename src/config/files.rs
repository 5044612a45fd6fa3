//! File search configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    /// Comma-separated folders to search; unset means Documents, Downloads and Desktop
    pub search_roots: Option<String>,

    /// Matches listed in the reply
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,
}

impl FilesConfig {
    /// Configured roots, or `None` to use the defaults.
    pub fn roots(&self) -> Option<Vec<PathBuf>> {
        let roots: Vec<PathBuf> = self
            .search_roots
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect();
        (!roots.is_empty()).then_some(roots)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.preview_count == 0 {
            return Err(ValidationError::InvalidPreviewCount);
        }
        Ok(())
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            search_roots: None,
            preview_count: default_preview_count(),
        }
    }
}

fn default_preview_count() -> usize {
    3
}
