//! Process Shell - SystemShell backed by the host's opener and shell.
//!
//! URLs and folders go through the desktop opener (`xdg-open`, `open` or
//! `cmd /C start`). Free-form commands run through the platform shell and
//! are left running in the background.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::ports::{ShellError, SystemShell};

/// Programs used to reach the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommands {
    /// Opener program and leading arguments; the target is appended.
    pub opener: Vec<String>,
    /// Shell program and leading arguments; the command line is appended.
    pub shell: Vec<String>,
}

impl ShellCommands {
    /// Commands for the platform this binary was built for.
    pub fn for_host() -> Self {
        let (opener, shell): (&[&str], &[&str]) = if cfg!(target_os = "windows") {
            (&["cmd", "/C", "start", ""], &["cmd", "/C"])
        } else if cfg!(target_os = "macos") {
            (&["open"], &["sh", "-c"])
        } else {
            (&["xdg-open"], &["sh", "-c"])
        };
        Self {
            opener: opener.iter().map(|s| s.to_string()).collect(),
            shell: shell.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for ShellCommands {
    fn default() -> Self {
        Self::for_host()
    }
}

/// SystemShell implementation using child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessShell {
    commands: ShellCommands,
}

impl ProcessShell {
    pub fn new(commands: ShellCommands) -> Self {
        Self { commands }
    }

    fn command(parts: &[String], last: &str) -> Result<Command, ShellError> {
        let (program, args) = parts.split_first().ok_or(ShellError::EmptyCommand)?;
        let mut cmd = Command::new(program);
        cmd.args(args)
            .arg(last)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        Ok(cmd)
    }

    /// Runs the opener on `target` and waits for it to hand off.
    async fn open(&self, target: &str) -> Result<(), ShellError> {
        let program = self.commands.opener.first().cloned().unwrap_or_default();
        let status = Self::command(&self.commands.opener, target)?
            .status()
            .await
            .map_err(|e| ShellError::Spawn {
                program: program.clone(),
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ShellError::Failed {
                program,
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

#[async_trait]
impl SystemShell for ProcessShell {
    async fn open_url(&self, url: &str) -> Result<(), ShellError> {
        tracing::debug!(url, "Opening URL");
        self.open(url).await
    }

    async fn open_path(&self, path: &Path) -> Result<(), ShellError> {
        tracing::debug!(path = %path.display(), "Opening folder");
        self.open(&path.to_string_lossy()).await
    }

    async fn spawn(&self, command_line: &str) -> Result<(), ShellError> {
        if command_line.trim().is_empty() {
            return Err(ShellError::EmptyCommand);
        }
        tracing::debug!(command_line, "Spawning command");
        let program = self.commands.shell.first().cloned().unwrap_or_default();
        Self::command(&self.commands.shell, command_line)?
            .kill_on_drop(false)
            .spawn()
            .map(drop)
            .map_err(|e| ShellError::Spawn {
                program,
                message: e.to_string(),
            })
    }
}
