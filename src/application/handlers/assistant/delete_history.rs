//! DeleteHistoryHandler - Command handler for removing a transcript.

use std::sync::Arc;

use crate::domain::foundation::TranscriptId;
use crate::ports::{TranscriptStore, TranscriptStoreError};

#[derive(Debug, Clone)]
pub struct DeleteHistoryCommand {
    pub transcript_id: TranscriptId,
}

pub struct DeleteHistoryHandler {
    transcripts: Arc<dyn TranscriptStore>,
}

impl DeleteHistoryHandler {
    pub fn new(transcripts: Arc<dyn TranscriptStore>) -> Self {
        Self { transcripts }
    }

    pub async fn handle(&self, cmd: DeleteHistoryCommand) -> Result<(), TranscriptStoreError> {
        self.transcripts.delete(&cmd.transcript_id).await?;
        tracing::info!(transcript = %cmd.transcript_id, "Deleted transcript");
        Ok(())
    }
}
