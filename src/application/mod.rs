//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands change conversation state; queries only read transcripts.

pub mod handlers;

pub use handlers::{
    DeleteHistoryCommand, DeleteHistoryHandler, DispatcherConfig, GetHistoryHandler,
    GetHistoryQuery, HandleUtteranceCommand, HandleUtteranceError, HandleUtteranceHandler,
    HandleUtteranceResult, ListHistoryHandler, ListHistoryQuery, StartNewChatCommand,
    StartNewChatHandler, StartNewChatResult, TaskDispatcher, TaskPorts,
};
