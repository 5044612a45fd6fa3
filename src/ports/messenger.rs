//! Messenger Port - Chat messages and calls to contacts.

use async_trait::async_trait;

use super::desktop::DesktopError;
use super::system_shell::ShellError;

#[derive(Debug, thiserror::Error)]
pub enum MessengerError {
    /// The voice or video call button could not be located.
    #[error("call button not found")]
    CallButtonNotFound,

    #[error("could not open messenger: {0}")]
    Launch(#[from] ShellError),

    #[error(transparent)]
    Desktop(#[from] DesktopError),
}

/// Port for messaging contacts.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Sends `message` to `contact`.
    async fn send_message(&self, contact: &str, message: &str) -> Result<(), MessengerError>;

    /// Starts a voice or video call with `contact`.
    async fn start_call(&self, contact: &str, is_video: bool) -> Result<(), MessengerError>;
}
