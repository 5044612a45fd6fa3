//! System Shell Port - Opening URLs, folders and programs on the host.

use async_trait::async_trait;
use std::path::Path;

/// Host command errors.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The program could not be started.
    #[error("failed to start {program}: {message}")]
    Spawn { program: String, message: String },

    /// The program exited unsuccessfully.
    #[error("{program} exited with code {code}")]
    Failed { program: String, code: i32 },

    #[error("empty command")]
    EmptyCommand,
}

/// Port for the host operating system.
#[async_trait]
pub trait SystemShell: Send + Sync {
    /// Opens a URL in the default browser or handler (`whatsapp://` etc).
    async fn open_url(&self, url: &str) -> Result<(), ShellError>;

    /// Opens a folder in the file manager.
    async fn open_path(&self, path: &Path) -> Result<(), ShellError>;

    /// Starts a shell command line without waiting for it to finish.
    async fn spawn(&self, command_line: &str) -> Result<(), ShellError>;
}
