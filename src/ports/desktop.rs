//! Desktop Automation Port - Keyboard, mouse and window focus.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    #[error("no window found matching '{0}'")]
    WindowNotFound(String),

    #[error("desktop command failed: {0}")]
    Command(String),
}

/// Port for driving the desktop like a user would.
#[async_trait]
pub trait DesktopAutomation: Send + Sync {
    /// Brings the first window whose title contains `title` to the front.
    async fn focus_window(&self, title: &str) -> Result<(), DesktopError>;

    /// Presses a key or key combination such as `Return` or `ctrl+f`.
    async fn key(&self, combo: &str) -> Result<(), DesktopError>;

    /// Types text into the focused window.
    async fn type_text(&self, text: &str) -> Result<(), DesktopError>;

    /// Left-clicks at absolute screen coordinates.
    async fn click_at(&self, x: i32, y: i32) -> Result<(), DesktopError>;
}
