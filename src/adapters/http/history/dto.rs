//! Response bodies for the history endpoints.
//!
//! These keep the shapes the chat client already reads, so they differ
//! from the standard [`ErrorResponse`](crate::adapters::http::ErrorResponse).

use serde::{Deserialize, Serialize};

/// 404 body of `GET /history/:filename`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryNotFound {
    pub error: String,
}

impl HistoryNotFound {
    pub fn new() -> Self {
        Self {
            error: "File not found".to_string(),
        }
    }
}

impl Default for HistoryNotFound {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of `DELETE /delete_history/:filename`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }
}
