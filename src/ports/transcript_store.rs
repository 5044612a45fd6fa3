//! Transcript Store Port - Chat history files.

use async_trait::async_trait;

use crate::domain::foundation::TranscriptId;
use crate::domain::transcript::TranscriptEntry;

#[derive(Debug, thiserror::Error)]
pub enum TranscriptStoreError {
    #[error("transcript not found: {0}")]
    NotFound(TranscriptId),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Port for reading and writing transcripts.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Appends one entry, creating the transcript if it does not exist.
    ///
    /// A transcript that cannot be parsed is replaced by one holding only
    /// the new entry.
    async fn append(&self, id: &TranscriptId, entry: TranscriptEntry)
        -> Result<(), TranscriptStoreError>;

    /// Lists transcripts, most recently modified first.
    async fn list(&self) -> Result<Vec<TranscriptId>, TranscriptStoreError>;

    /// Loads every entry of a transcript.
    async fn load(&self, id: &TranscriptId) -> Result<Vec<TranscriptEntry>, TranscriptStoreError>;

    /// Deletes a transcript.
    async fn delete(&self, id: &TranscriptId) -> Result<(), TranscriptStoreError>;
}
