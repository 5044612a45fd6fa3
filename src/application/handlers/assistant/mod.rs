//! Assistant handlers: chat turns, new chats and transcript history.

mod delete_history;
mod get_history;
mod handle_utterance;
mod list_history;
mod start_new_chat;
mod task_dispatcher;

pub use delete_history::{DeleteHistoryCommand, DeleteHistoryHandler};
pub use get_history::{GetHistoryHandler, GetHistoryQuery};
pub use handle_utterance::{
    HandleUtteranceCommand, HandleUtteranceError, HandleUtteranceHandler, HandleUtteranceResult,
};
pub use list_history::{ListHistoryHandler, ListHistoryQuery};
pub use start_new_chat::{StartNewChatCommand, StartNewChatHandler, StartNewChatResult};
pub use task_dispatcher::{DispatcherConfig, TaskDispatcher, TaskPorts};
