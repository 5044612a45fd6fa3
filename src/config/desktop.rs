//! Desktop automation (WhatsApp) configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct DesktopConfig {
    #[serde(default = "default_whatsapp_uri")]
    pub whatsapp_uri: String,

    #[serde(default = "default_window_title")]
    pub window_title: String,

    #[serde(default = "default_launch_delay")]
    pub launch_delay_ms: u64,

    #[serde(default = "default_search_delay")]
    pub search_delay_ms: u64,

    #[serde(default = "default_results_delay")]
    pub results_delay_ms: u64,

    #[serde(default = "default_chat_delay")]
    pub chat_delay_ms: u64,

    /// Screen position `x,y` of the voice call button
    pub voice_call_button: Option<String>,

    /// Screen position `x,y` of the video call button
    pub video_call_button: Option<String>,

    #[serde(default = "default_xdotool")]
    pub xdotool_program: String,

    #[serde(default = "default_command_timeout")]
    pub command_timeout_secs: u64,
}

/// Parses `x,y` into a screen position.
pub fn parse_point(raw: &str) -> Result<(i32, i32), ValidationError> {
    let invalid = || ValidationError::InvalidButtonPosition(raw.to_string());
    let (x, y) = raw.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok((x, y))
}

fn optional_point(raw: &Option<String>) -> Result<Option<(i32, i32)>, ValidationError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_point(raw).map(Some),
    }
}

impl DesktopConfig {
    pub fn voice_call_point(&self) -> Result<Option<(i32, i32)>, ValidationError> {
        optional_point(&self.voice_call_button)
    }

    pub fn video_call_point(&self) -> Result<Option<(i32, i32)>, ValidationError> {
        optional_point(&self.video_call_button)
    }

    pub fn launch_delay(&self) -> Duration {
        Duration::from_millis(self.launch_delay_ms)
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn results_delay(&self) -> Duration {
        Duration::from_millis(self.results_delay_ms)
    }

    pub fn chat_delay(&self) -> Duration {
        Duration::from_millis(self.chat_delay_ms)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.whatsapp_uri.is_empty() {
            return Err(ValidationError::MissingRequired("DESKTOP__WHATSAPP_URI"));
        }
        if self.command_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        self.voice_call_point()?;
        self.video_call_point()?;
        Ok(())
    }
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            whatsapp_uri: default_whatsapp_uri(),
            window_title: default_window_title(),
            launch_delay_ms: default_launch_delay(),
            search_delay_ms: default_search_delay(),
            results_delay_ms: default_results_delay(),
            chat_delay_ms: default_chat_delay(),
            voice_call_button: None,
            video_call_button: None,
            xdotool_program: default_xdotool(),
            command_timeout_secs: default_command_timeout(),
        }
    }
}

fn default_whatsapp_uri() -> String {
    "whatsapp://".to_string()
}

fn default_window_title() -> String {
    "WhatsApp".to_string()
}

fn default_launch_delay() -> u64 {
    3000
}

fn default_search_delay() -> u64 {
    500
}

fn default_results_delay() -> u64 {
    1500
}

fn default_chat_delay() -> u64 {
    1000
}

fn default_xdotool() -> String {
    "xdotool".to_string()
}

fn default_command_timeout() -> u64 {
    30
}
