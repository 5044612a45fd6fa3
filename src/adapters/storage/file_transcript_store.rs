//! File-based Transcript Store Adapter
//!
//! One pretty-printed JSON array per chat inside a history folder.

use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::fs;

use crate::domain::foundation::TranscriptId;
use crate::domain::transcript::TranscriptEntry;
use crate::ports::{TranscriptStore, TranscriptStoreError};

/// File-based storage for chat transcripts
#[derive(Debug, Clone)]
pub struct FileTranscriptStore {
    folder: PathBuf,
}

impl FileTranscriptStore {
    /// Create a store rooted at `folder`; the folder is created on first write.
    pub fn new<P: AsRef<Path>>(folder: P) -> Self {
        Self {
            folder: folder.as_ref().to_path_buf(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    fn path_for(&self, id: &TranscriptId) -> PathBuf {
        self.folder.join(id.as_str())
    }

    /// Reads the entries of an existing file; unreadable JSON counts as empty.
    async fn read_entries(
        &self,
        id: &TranscriptId,
    ) -> Result<Vec<TranscriptEntry>, TranscriptStoreError> {
        let raw = fs::read_to_string(self.path_for(id))
            .await
            .map_err(|e| io_error(id, e))?;

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    transcript = %id,
                    error = %e,
                    "Malformed transcript, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }
}

fn io_error(id: &TranscriptId, e: std::io::Error) -> TranscriptStoreError {
    if e.kind() == std::io::ErrorKind::NotFound {
        TranscriptStoreError::NotFound(id.clone())
    } else {
        TranscriptStoreError::Io(e.to_string())
    }
}

/// JSON with four-space indentation.
fn to_pretty_json(entries: &[TranscriptEntry]) -> Result<Vec<u8>, TranscriptStoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries
        .serialize(&mut serializer)
        .map_err(|e| TranscriptStoreError::Serialization(e.to_string()))?;
    Ok(buf)
}

#[async_trait]
impl TranscriptStore for FileTranscriptStore {
    async fn append(
        &self,
        id: &TranscriptId,
        entry: TranscriptEntry,
    ) -> Result<(), TranscriptStoreError> {
        fs::create_dir_all(&self.folder)
            .await
            .map_err(|e| TranscriptStoreError::Io(e.to_string()))?;

        let mut entries = match self.read_entries(id).await {
            Ok(entries) => entries,
            Err(TranscriptStoreError::NotFound(_)) => Vec::new(),
            Err(e) => return Err(e),
        };
        entries.push(entry);

        fs::write(self.path_for(id), to_pretty_json(&entries)?)
            .await
            .map_err(|e| TranscriptStoreError::Io(e.to_string()))
    }

    async fn list(&self) -> Result<Vec<TranscriptId>, TranscriptStoreError> {
        let mut dir = match fs::read_dir(&self.folder).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(TranscriptStoreError::Io(e.to_string())),
        };

        let mut found: Vec<(SystemTime, TranscriptId)> = Vec::new();
        while let Some(item) = dir
            .next_entry()
            .await
            .map_err(|e| TranscriptStoreError::Io(e.to_string()))?
        {
            let is_file = item.file_type().await.map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let Some(name) = item.file_name().to_str().map(str::to_string) else {
                continue;
            };
            let Ok(id) = TranscriptId::parse(name) else {
                continue;
            };
            let modified = item
                .metadata()
                .await
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            found.push((modified, id));
        }

        found.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
        Ok(found.into_iter().map(|(_, id)| id).collect())
    }

    async fn load(&self, id: &TranscriptId) -> Result<Vec<TranscriptEntry>, TranscriptStoreError> {
        self.read_entries(id).await
    }

    async fn delete(&self, id: &TranscriptId) -> Result<(), TranscriptStoreError> {
        fs::remove_file(self.path_for(id))
            .await
            .map_err(|e| io_error(id, e))
    }
}
