//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assistant;

pub use assistant::{
    // Commands
    DeleteHistoryCommand, HandleUtteranceCommand, StartNewChatCommand,
    // Queries
    GetHistoryQuery, ListHistoryQuery,
    // Handlers
    DeleteHistoryHandler, GetHistoryHandler, HandleUtteranceHandler, ListHistoryHandler,
    StartNewChatHandler,
    // Results and errors
    HandleUtteranceError, HandleUtteranceResult, StartNewChatResult,
    // Task execution
    DispatcherConfig, TaskDispatcher, TaskPorts,
};
