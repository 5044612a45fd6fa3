//! GetHistoryHandler - Query handler for one transcript.

use std::sync::Arc;

use crate::domain::foundation::TranscriptId;
use crate::domain::transcript::TranscriptEntry;
use crate::ports::{TranscriptStore, TranscriptStoreError};

#[derive(Debug, Clone)]
pub struct GetHistoryQuery {
    pub transcript_id: TranscriptId,
}

pub struct GetHistoryHandler {
    transcripts: Arc<dyn TranscriptStore>,
}

impl GetHistoryHandler {
    pub fn new(transcripts: Arc<dyn TranscriptStore>) -> Self {
        Self { transcripts }
    }

    pub async fn handle(
        &self,
        query: GetHistoryQuery,
    ) -> Result<Vec<TranscriptEntry>, TranscriptStoreError> {
        self.transcripts.load(&query.transcript_id).await
    }
}
