//! WhatsApp Desktop messenger driven through UI automation.
//!
//! There is no API for the desktop client, so this adapter does what a
//! person would: open the app, search the contact with `ctrl+f`, then type
//! a message or click the call button. Delays give the UI time to react;
//! all of them come from configuration.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{DesktopAutomation, Messenger, MessengerError, SystemShell};

/// Screen position of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

/// Where WhatsApp lives and how long to wait between steps.
#[derive(Debug, Clone)]
pub struct WhatsappFlow {
    /// URI that launches or focuses the app.
    pub launch_uri: String,
    pub window_title: String,
    pub launch_delay: Duration,
    /// Wait after opening the search box.
    pub search_delay: Duration,
    /// Wait after typing the contact name.
    pub results_delay: Duration,
    /// Wait after opening the chat.
    pub chat_delay: Duration,
    pub voice_call_button: Option<ScreenPoint>,
    pub video_call_button: Option<ScreenPoint>,
}

impl Default for WhatsappFlow {
    fn default() -> Self {
        Self {
            launch_uri: "whatsapp://".to_string(),
            window_title: "WhatsApp".to_string(),
            launch_delay: Duration::from_secs(3),
            search_delay: Duration::from_millis(500),
            results_delay: Duration::from_millis(1500),
            chat_delay: Duration::from_secs(1),
            voice_call_button: None,
            video_call_button: None,
        }
    }
}

/// Messenger implementation for WhatsApp Desktop.
pub struct WhatsappMessenger {
    shell: Arc<dyn SystemShell>,
    desktop: Arc<dyn DesktopAutomation>,
    flow: WhatsappFlow,
}

impl WhatsappMessenger {
    pub fn new(
        shell: Arc<dyn SystemShell>,
        desktop: Arc<dyn DesktopAutomation>,
        flow: WhatsappFlow,
    ) -> Self {
        Self {
            shell,
            desktop,
            flow,
        }
    }

    /// Opens the app and brings it to the front.
    async fn open_app(&self) -> Result<(), MessengerError> {
        self.shell.open_url(&self.flow.launch_uri).await?;
        sleep(self.flow.launch_delay).await;

        // The app may already be focused under a different title.
        if let Err(e) = self.desktop.focus_window(&self.flow.window_title).await {
            tracing::warn!(error = %e, "Could not focus WhatsApp window");
        }
        Ok(())
    }

    /// Opens the chat with `contact`.
    async fn open_chat(&self, contact: &str) -> Result<(), MessengerError> {
        self.open_app().await?;
        self.desktop.key("ctrl+f").await?;
        sleep(self.flow.search_delay).await;
        self.desktop.type_text(contact).await?;
        sleep(self.flow.results_delay).await;
        self.desktop.key("Return").await?;
        sleep(self.flow.chat_delay).await;
        Ok(())
    }
}

#[async_trait]
impl Messenger for WhatsappMessenger {
    async fn send_message(&self, contact: &str, message: &str) -> Result<(), MessengerError> {
        self.open_chat(contact).await?;
        self.desktop.type_text(message).await?;
        self.desktop.key("Return").await?;
        tracing::info!(contact, "WhatsApp message sent");
        Ok(())
    }

    async fn start_call(&self, contact: &str, is_video: bool) -> Result<(), MessengerError> {
        self.open_chat(contact).await?;
        let button = if is_video {
            self.flow.video_call_button
        } else {
            self.flow.voice_call_button
        };
        let point = button.ok_or(MessengerError::CallButtonNotFound)?;
        self.desktop.click_at(point.x, point.y).await?;
        tracing::info!(contact, is_video, "WhatsApp call started");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{DesktopError, ShellError};
    use std::path::Path;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingShell {
        opened: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl SystemShell for RecordingShell {
        async fn open_url(&self, url: &str) -> Result<(), ShellError> {
            if self.fail {
                return Err(ShellError::Failed {
                    program: "xdg-open".to_string(),
                    code: 4,
                });
            }
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }

        async fn open_path(&self, _path: &Path) -> Result<(), ShellError> {
            Ok(())
        }

        async fn spawn(&self, _command_line: &str) -> Result<(), ShellError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingDesktop {
        actions: Mutex<Vec<String>>,
        no_window: bool,
    }

    impl RecordingDesktop {
        fn actions(&self) -> Vec<String> {
            self.actions.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DesktopAutomation for RecordingDesktop {
        async fn focus_window(&self, title: &str) -> Result<(), DesktopError> {
            if self.no_window {
                return Err(DesktopError::WindowNotFound(title.to_string()));
            }
            self.actions.lock().unwrap().push(format!("focus {}", title));
            Ok(())
        }

        async fn key(&self, combo: &str) -> Result<(), DesktopError> {
            self.actions.lock().unwrap().push(format!("key {}", combo));
            Ok(())
        }

        async fn type_text(&self, text: &str) -> Result<(), DesktopError> {
            self.actions.lock().unwrap().push(format!("type {}", text));
            Ok(())
        }

        async fn click_at(&self, x: i32, y: i32) -> Result<(), DesktopError> {
            self.actions.lock().unwrap().push(format!("click {},{}", x, y));
            Ok(())
        }
    }

    fn instant_flow() -> WhatsappFlow {
        WhatsappFlow {
            launch_delay: Duration::ZERO,
            search_delay: Duration::ZERO,
            results_delay: Duration::ZERO,
            chat_delay: Duration::ZERO,
            video_call_button: Some(ScreenPoint { x: 1700, y: 80 }),
            ..WhatsappFlow::default()
        }
    }

    fn messenger(
        shell: Arc<RecordingShell>,
        desktop: Arc<RecordingDesktop>,
    ) -> WhatsappMessenger {
        WhatsappMessenger::new(shell, desktop, instant_flow())
    }

    #[tokio::test]
    async fn message_searches_contact_then_types() {
        let shell = Arc::new(RecordingShell::default());
        let desktop = Arc::new(RecordingDesktop::default());

        messenger(shell.clone(), desktop.clone())
            .send_message("mom", "running late")
            .await
            .unwrap();

        assert_eq!(*shell.opened.lock().unwrap(), vec!["whatsapp://"]);
        assert_eq!(
            desktop.actions(),
            vec![
                "focus WhatsApp",
                "key ctrl+f",
                "type mom",
                "key Return",
                "type running late",
                "key Return",
            ]
        );
    }

    #[tokio::test]
    async fn video_call_clicks_configured_button() {
        let desktop = Arc::new(RecordingDesktop::default());

        messenger(Arc::new(RecordingShell::default()), desktop.clone())
            .start_call("Raj", true)
            .await
            .unwrap();

        assert_eq!(desktop.actions().last().unwrap(), "click 1700,80");
    }

    #[tokio::test]
    async fn unconfigured_button_is_not_found() {
        let err = messenger(
            Arc::new(RecordingShell::default()),
            Arc::new(RecordingDesktop::default()),
        )
        .start_call("Raj", false)
        .await
        .unwrap_err();

        assert!(matches!(err, MessengerError::CallButtonNotFound));
    }

    #[tokio::test]
    async fn missing_window_does_not_stop_the_flow() {
        let desktop = Arc::new(RecordingDesktop {
            no_window: true,
            ..RecordingDesktop::default()
        });

        messenger(Arc::new(RecordingShell::default()), desktop.clone())
            .send_message("dad", "hi")
            .await
            .unwrap();

        assert_eq!(desktop.actions()[0], "key ctrl+f");
    }

    #[tokio::test]
    async fn launch_failure_is_reported() {
        let shell = Arc::new(RecordingShell {
            fail: true,
            ..RecordingShell::default()
        });
        let err = messenger(shell, Arc::new(RecordingDesktop::default()))
            .send_message("dad", "hi")
            .await
            .unwrap_err();

        assert!(matches!(err, MessengerError::Launch(_)));
    }
}
