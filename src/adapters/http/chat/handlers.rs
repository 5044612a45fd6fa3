//! HTTP handlers for the chat endpoints.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::adapters::http::ApiError;
use crate::application::{
    HandleUtteranceCommand, HandleUtteranceHandler, StartNewChatCommand, StartNewChatHandler,
};
use crate::domain::foundation::ConversationId;

use super::dto::{ChatRequest, ChatResponse, NewChatRequest, NewChatResponse};

#[derive(Clone)]
pub struct ChatHandlers {
    utterance_handler: Arc<HandleUtteranceHandler>,
    new_chat_handler: Arc<StartNewChatHandler>,
}

impl ChatHandlers {
    pub fn new(
        utterance_handler: Arc<HandleUtteranceHandler>,
        new_chat_handler: Arc<StartNewChatHandler>,
    ) -> Self {
        Self {
            utterance_handler,
            new_chat_handler,
        }
    }
}

/// Missing ids select the shared conversation.
fn conversation_id(raw: Option<String>) -> Result<ConversationId, ApiError> {
    match raw {
        Some(raw) => Ok(ConversationId::parse(raw)?),
        None => Ok(ConversationId::shared()),
    }
}

/// POST /auto - Handle one chat turn
pub async fn chat(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = HandleUtteranceCommand {
        conversation_id: conversation_id(req.conversation_id)?,
        message: req.message,
    };

    let result = handlers.utterance_handler.handle(cmd).await?;

    Ok(Json(ChatResponse {
        reply: result.reply,
        conversation_id: result.conversation_id.to_string(),
    }))
}

/// POST /new_chat - Start over
pub async fn new_chat(
    State(handlers): State<ChatHandlers>,
    req: Option<Json<NewChatRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let req = req.map(|Json(req)| req).unwrap_or_default();
    let cmd = StartNewChatCommand {
        conversation_id: conversation_id(req.conversation_id)?,
    };

    let result = handlers.new_chat_handler.handle(cmd).await?;

    Ok(Json(NewChatResponse::started(
        result.conversation_id.to_string(),
    )))
}
