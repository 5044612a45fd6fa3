//! Xdotool backend for Linux desktop automation.
//!
//! Wraps the `xdotool` CLI (X11). Every invocation is bounded by a timeout
//! so a stuck X server cannot hang a request.
//!
//! Requires: `sudo apt install xdotool` (X11 session).

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use crate::ports::{DesktopAutomation, DesktopError};

/// Default command timeout for xdotool invocations.
const XDOTOOL_TIMEOUT_SECS: u64 = 30;

/// Linux desktop automation via xdotool.
#[derive(Debug, Clone)]
pub struct XdotoolDesktop {
    program: String,
    leading_args: Vec<String>,
    timeout: Duration,
}

impl XdotoolDesktop {
    pub fn new() -> Self {
        Self {
            program: "xdotool".to_string(),
            leading_args: Vec::new(),
            timeout: Duration::from_secs(XDOTOOL_TIMEOUT_SECS),
        }
    }

    /// Uses another binary with the same command line interface.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Uses `program` with `leading_args` placed before every xdotool argument.
    pub fn with_command(mut self, program: impl Into<String>, leading_args: Vec<String>) -> Self {
        self.program = program.into();
        self.leading_args = leading_args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run xdotool with a timeout, returning stdout.
    async fn run(&self, args: &[&str]) -> Result<String, DesktopError> {
        let child = Command::new(&self.program)
            .args(&self.leading_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                DesktopError::Command(format!("failed to spawn {}: {}", self.program, e))
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                DesktopError::Command(format!(
                    "{} timed out after {}s",
                    self.program,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| DesktopError::Command(format!("failed to run {}: {}", self.program, e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() { stdout.trim() } else { stderr.trim() };
            return Err(DesktopError::Command(format!(
                "{} exited with code {}: {}",
                self.program,
                output.status.code().unwrap_or(-1),
                detail
            )));
        }
        Ok(stdout)
    }
}

impl Default for XdotoolDesktop {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DesktopAutomation for XdotoolDesktop {
    async fn focus_window(&self, title: &str) -> Result<(), DesktopError> {
        // xdotool search exits non-zero when nothing matches.
        let ids = self
            .run(&["search", "--name", title])
            .await
            .map_err(|_| DesktopError::WindowNotFound(title.to_string()))?;
        let first_id = ids
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| DesktopError::WindowNotFound(title.to_string()))?;
        self.run(&["windowactivate", "--sync", first_id]).await?;
        Ok(())
    }

    async fn key(&self, combo: &str) -> Result<(), DesktopError> {
        self.run(&["key", combo]).await.map(drop)
    }

    async fn type_text(&self, text: &str) -> Result<(), DesktopError> {
        self.run(&["type", "--", text]).await.map(drop)
    }

    async fn click_at(&self, x: i32, y: i32) -> Result<(), DesktopError> {
        let (x, y) = (x.to_string(), y.to_string());
        self.run(&["mousemove", &x, &y, "click", "1"]).await.map(drop)
    }
}
