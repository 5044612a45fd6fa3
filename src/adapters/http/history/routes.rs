//! HTTP routes for the history endpoints.

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{delete_history, get_history, list_history, HistoryHandlers};

pub fn history_routes(handlers: HistoryHandlers) -> Router {
    Router::new()
        .route("/history", get(list_history))
        .route("/history/:filename", get(get_history))
        .route("/delete_history/:filename", delete(delete_history))
        .with_state(handlers)
}
