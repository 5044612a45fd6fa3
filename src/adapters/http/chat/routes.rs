//! HTTP routes for the chat endpoints.

use axum::{routing::post, Router};

use super::handlers::{chat, new_chat, ChatHandlers};

pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/auto", post(chat))
        .route("/new_chat", post(new_chat))
        .with_state(handlers)
}
