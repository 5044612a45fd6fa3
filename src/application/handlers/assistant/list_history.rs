//! ListHistoryHandler - Query handler for saved transcripts.

use std::sync::Arc;

use crate::domain::foundation::TranscriptId;
use crate::ports::{TranscriptStore, TranscriptStoreError};

/// Query for every saved transcript.
#[derive(Debug, Clone, Default)]
pub struct ListHistoryQuery;

pub struct ListHistoryHandler {
    transcripts: Arc<dyn TranscriptStore>,
}

impl ListHistoryHandler {
    pub fn new(transcripts: Arc<dyn TranscriptStore>) -> Self {
        Self { transcripts }
    }

    /// Transcript names, newest first.
    pub async fn handle(
        &self,
        _query: ListHistoryQuery,
    ) -> Result<Vec<TranscriptId>, TranscriptStoreError> {
        self.transcripts.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::FileTranscriptStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::transcript::{Sender, TranscriptEntry};
    use tempfile::TempDir;

    #[tokio::test]
    async fn lists_appended_transcripts() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(FileTranscriptStore::new(dir.path()));
        let id = TranscriptId::parse("hi_2026-01-14_14-30-00.json").unwrap();
        store
            .append(&id, TranscriptEntry::new(Sender::User, "hi", Timestamp::now()))
            .await
            .unwrap();

        let handler = ListHistoryHandler::new(store);
        assert_eq!(handler.handle(ListHistoryQuery).await.unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn empty_folder_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let handler = ListHistoryHandler::new(Arc::new(FileTranscriptStore::new(
            dir.path().join("missing"),
        )));
        assert!(handler.handle(ListHistoryQuery).await.unwrap().is_empty());
    }
}
