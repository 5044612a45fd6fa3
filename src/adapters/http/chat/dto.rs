//! Request and response bodies for the chat endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /auto`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    pub conversation_id: String,
}

/// Body of `POST /new_chat`; may be omitted entirely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChatRequest {
    pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChatResponse {
    pub status: String,
    pub message: String,
    pub conversation_id: String,
}

impl NewChatResponse {
    pub fn started(conversation_id: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: "New session started".to_string(),
            conversation_id: conversation_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_defaults_missing_fields() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.message, "");
        assert!(req.conversation_id.is_none());

        let req: ChatRequest =
            serde_json::from_str(r#"{"message":"hi","conversationId":"abc"}"#).unwrap();
        assert_eq!(req.conversation_id.as_deref(), Some("abc"));
    }

    #[test]
    fn responses_use_camel_case() {
        let json = serde_json::to_value(NewChatResponse::started("default")).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "New session started");
        assert_eq!(json["conversationId"], "default");
    }
}
