//! HTTP adapters - REST API implementations.
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | POST | `/auto` | one chat turn |
//! | POST | `/new_chat` | reset a conversation |
//! | GET | `/history` | transcript names, newest first |
//! | GET | `/history/:filename` | one transcript |
//! | DELETE | `/delete_history/:filename` | remove a transcript |
//! | GET | `/health` | liveness |

pub mod chat;
pub mod history;

mod error;
mod health;
mod router;

pub use chat::{chat_routes, ChatHandlers};
pub use error::{ApiError, ErrorResponse};
pub use history::{history_routes, HistoryHandlers};
pub use router::{app_router, RouterSettings};
