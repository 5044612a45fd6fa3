//! Session Store Port - Per-conversation dialogue state.

use async_trait::async_trait;

use crate::domain::assistant::DialogueState;
use crate::domain::foundation::{ConversationId, TranscriptId};

/// Everything remembered between turns of one conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRecord {
    pub dialogue: DialogueState,
    /// Transcript file receiving this conversation's lines, once created.
    pub transcript: Option<TranscriptId>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for conversation state. Writes are last-write-wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads a conversation's record; unknown ids get a fresh one.
    async fn load(&self, id: &ConversationId) -> Result<SessionRecord, SessionStoreError>;

    /// Replaces a conversation's record.
    async fn save(&self, id: &ConversationId, record: SessionRecord)
        -> Result<(), SessionStoreError>;

    /// Forgets a conversation, so its next load is fresh.
    async fn reset(&self, id: &ConversationId) -> Result<(), SessionStoreError>;
}
