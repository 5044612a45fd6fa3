//! In-Memory Session Store Adapter
//!
//! Keeps each conversation's dialogue state and transcript pointer in a
//! map. State is lost on restart. The map is bounded: once full, saving a
//! new conversation evicts the one saved least recently.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ConversationId;
use crate::ports::{SessionRecord, SessionStore, SessionStoreError};

/// Conversations held before eviction starts.
pub const DEFAULT_MAX_CONVERSATIONS: usize = 1024;

#[derive(Debug, Default)]
struct Records {
    entries: HashMap<ConversationId, (SessionRecord, u64)>,
    /// Bumped on every save; larger means more recent.
    clock: u64,
}

/// In-memory storage for session records
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    records: Arc<RwLock<Records>>,
    max_conversations: usize,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_CONVERSATIONS)
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding at most `max_conversations` records (minimum 1).
    pub fn with_capacity(max_conversations: usize) -> Self {
        Self {
            records: Arc::new(RwLock::new(Records::default())),
            max_conversations: max_conversations.max(1),
        }
    }

    /// Number of conversations currently held
    pub async fn len(&self) -> usize {
        self.records.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.entries.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: &ConversationId) -> Result<SessionRecord, SessionStoreError> {
        let records = self.records.read().await;
        Ok(records
            .entries
            .get(id)
            .map(|(record, _)| record.clone())
            .unwrap_or_default())
    }

    async fn save(
        &self,
        id: &ConversationId,
        record: SessionRecord,
    ) -> Result<(), SessionStoreError> {
        let mut records = self.records.write().await;
        if !records.entries.contains_key(id) && records.entries.len() >= self.max_conversations {
            let oldest = records
                .entries
                .iter()
                .min_by_key(|(_, (_, saved_at))| *saved_at)
                .map(|(oldest, _)| oldest.clone());
            if let Some(oldest) = oldest {
                tracing::debug!(conversation = %oldest, "Evicting idle conversation");
                records.entries.remove(&oldest);
            }
        }
        records.clock += 1;
        let saved_at = records.clock;
        records.entries.insert(id.clone(), (record, saved_at));
        Ok(())
    }

    async fn reset(&self, id: &ConversationId) -> Result<(), SessionStoreError> {
        self.records.write().await.entries.remove(id);
        Ok(())
    }
}
