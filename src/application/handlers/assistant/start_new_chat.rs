//! StartNewChatHandler - Command handler for resetting a conversation.

use std::sync::Arc;

use crate::domain::foundation::ConversationId;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to start over in a conversation.
#[derive(Debug, Clone)]
pub struct StartNewChatCommand {
    pub conversation_id: ConversationId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartNewChatResult {
    pub conversation_id: ConversationId,
}

/// Handler for "new chat": drops the dialogue state and the transcript
/// pointer so the next message opens a fresh history file.
pub struct StartNewChatHandler {
    sessions: Arc<dyn SessionStore>,
}

impl StartNewChatHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        cmd: StartNewChatCommand,
    ) -> Result<StartNewChatResult, SessionStoreError> {
        self.sessions.reset(&cmd.conversation_id).await?;
        tracing::info!(conversation = %cmd.conversation_id, "Started new chat");

        Ok(StartNewChatResult {
            conversation_id: cmd.conversation_id,
        })
    }
}
