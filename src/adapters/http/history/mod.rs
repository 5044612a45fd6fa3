//! HTTP adapter for transcript history endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{DeleteResponse, HistoryNotFound};
pub use handlers::HistoryHandlers;
pub use routes::history_routes;
