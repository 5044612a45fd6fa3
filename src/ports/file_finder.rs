//! File Finder Port - Local file name search.

use async_trait::async_trait;
use std::path::PathBuf;

/// One file whose name matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    /// File name only.
    pub name: String,
    /// Folder containing the file.
    pub directory: PathBuf,
}

impl FileMatch {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FileSearchError {
    #[error("io error: {0}")]
    Io(String),

    #[error("search task failed: {0}")]
    Task(String),
}

/// Port for searching local files by name.
#[async_trait]
pub trait FileFinder: Send + Sync {
    /// Returns every file whose name contains `fragment`, best match first.
    async fn find(&self, fragment: &str) -> Result<Vec<FileMatch>, FileSearchError>;
}
