//! TaskDispatcher - executes resolved task commands through the ports.
//!
//! Every outcome, success or failure, becomes the text shown to the user.
//! Failures are logged here and never propagate further.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::assistant::TaskCommand;
use crate::ports::{
    AIProvider, CompletionRequest, EmailSender, FileFinder, FileMatch, MessageRole, Messenger,
    MessengerError, OutgoingEmail, Storefront, SystemShell,
};

/// Spoken app names and the command that starts each one.
static KNOWN_APPS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("settings", "start ms-settings:"),
        ("vs code", "code"),
        ("vscode", "code"),
        ("visual studio code", "code"),
        ("notepad", "notepad"),
        ("calculator", "calc"),
        ("chrome", "start chrome"),
        ("file explorer", "explorer"),
        ("task manager", "taskmgr"),
    ])
});

const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

/// Tunables for the dispatcher.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Extra or overriding app name to command pairs (names lower-case).
    pub apps: HashMap<String, String>,
    pub system_prompt: Option<String>,
    pub max_tokens: Option<u32>,
    /// How many file matches are listed.
    pub file_preview_count: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            apps: HashMap::new(),
            system_prompt: None,
            max_tokens: None,
            file_preview_count: 3,
        }
    }
}

/// Ports the dispatcher drives.
#[derive(Clone)]
pub struct TaskPorts {
    pub ai: Arc<dyn AIProvider>,
    pub email: Arc<dyn EmailSender>,
    pub storefront: Arc<dyn Storefront>,
    pub shell: Arc<dyn SystemShell>,
    pub files: Arc<dyn FileFinder>,
    pub messenger: Arc<dyn Messenger>,
}

/// Executes task commands and renders their results.
pub struct TaskDispatcher {
    ports: TaskPorts,
    config: DispatcherConfig,
}

impl TaskDispatcher {
    pub fn new(ports: TaskPorts, config: DispatcherConfig) -> Self {
        Self { ports, config }
    }

    /// Runs `command` and returns the reply text.
    pub async fn dispatch(&self, command: &TaskCommand) -> String {
        tracing::info!(task = command.name(), "Dispatching task");

        match command {
            TaskCommand::SendEmail { to, subject, body } => {
                self.send_email(OutgoingEmail::new(to, subject, body)).await
            }
            TaskCommand::AnswerQuestion { question } => self.answer(question).await,
            TaskCommand::AddToCart { item } => self.add_to_cart(item).await,
            TaskCommand::OpenApplication { name } => self.open_application(name).await,
            TaskCommand::SearchYoutube { query } => self.search_youtube(query).await,
            TaskCommand::OpenWebsite { target } => self.open_website(target).await,
            TaskCommand::SearchFiles { fragment } => self.search_files(fragment).await,
            TaskCommand::SendChatMessage { contact, message } => {
                self.send_chat_message(contact, message).await
            }
            TaskCommand::StartCall { contact, is_video } => {
                self.start_call(contact, *is_video).await
            }
        }
    }

    async fn send_email(&self, email: OutgoingEmail) -> String {
        match self.ports.email.send(&email).await {
            Ok(()) => "✅ Email sent successfully!".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Email task failed");
                "Failed to send email.".to_string()
            }
        }
    }

    async fn answer(&self, question: &str) -> String {
        let mut request = CompletionRequest::new().with_message(MessageRole::User, question);
        if let Some(prompt) = &self.config.system_prompt {
            request = request.with_system_prompt(prompt.clone());
        }
        if let Some(max) = self.config.max_tokens {
            request = request.with_max_tokens(max);
        }

        match self.ports.ai.complete(request).await {
            Ok(response) => response.content,
            Err(e) => {
                tracing::warn!(error = %e, "Question task failed");
                "Sorry, I'm having trouble thinking right now.".to_string()
            }
        }
    }

    async fn add_to_cart(&self, item: &str) -> String {
        match self.ports.storefront.add_to_cart(item).await {
            Ok(()) => format!("Added {} to cart!", item),
            Err(e) => {
                tracing::warn!(error = %e, item, "Shopping task failed");
                format!("Shopping Error: {}", e)
            }
        }
    }

    /// Command for a known app name, configured entries first.
    fn known_app_command(&self, name: &str) -> Option<String> {
        self.config
            .apps
            .get(name)
            .cloned()
            .or_else(|| KNOWN_APPS.get(name).map(|c| c.to_string()))
    }

    async fn open_application(&self, name: &str) -> String {
        let name = name.to_lowercase();
        let (command, reply) = match self.known_app_command(&name) {
            Some(command) => (command, format!("✅ Opening {} for you.", name)),
            None => (name.clone(), format!("🚀 Attempting to launch {}...", name)),
        };

        match self.ports.shell.spawn(&command).await {
            Ok(()) => reply,
            Err(e) => {
                tracing::warn!(error = %e, app = %name, "App launch failed");
                format!("❌ Sorry, I couldn't open {}. Error: {}", name, e)
            }
        }
    }

    async fn search_youtube(&self, query: &str) -> String {
        let url = format!("{}{}", YOUTUBE_SEARCH_URL, urlencoding::encode(query));
        match self.ports.shell.open_url(&url).await {
            Ok(()) => format!("📺 Searching YouTube for '{}'...", query),
            Err(e) => {
                tracing::warn!(error = %e, "YouTube search failed");
                format!("❌ Failed to search YouTube: {}", e)
            }
        }
    }

    async fn open_website(&self, target: &str) -> String {
        let url = website_url(target);
        match self.ports.shell.open_url(&url).await {
            Ok(()) => format!("🌐 Opening {}...", url),
            Err(e) => {
                tracing::warn!(error = %e, url = %url, "Opening website failed");
                format!("❌ Failed to open website: {}", e)
            }
        }
    }

    async fn search_files(&self, fragment: &str) -> String {
        let matches = match self.ports.files.find(fragment).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(error = %e, "File search failed");
                return format!("❌ Error searching for files: {}", e);
            }
        };

        let Some(best) = matches.first() else {
            return format!(
                "📂 I couldn't find any files matching '{}' in your common folders.",
                fragment
            );
        };

        let listing = file_listing(&matches, self.config.file_preview_count);
        if let Err(e) = self.ports.shell.open_path(&best.directory).await {
            tracing::warn!(error = %e, "Could not open folder of best match");
        }
        format!("{}\n📂 Opening the folder for the best match...", listing)
    }

    async fn send_chat_message(&self, contact: &str, message: &str) -> String {
        match self.ports.messenger.send_message(contact, message).await {
            Ok(()) => format!("✅ Message sent to {}", contact),
            Err(e) => {
                tracing::warn!(error = %e, contact, "Messaging task failed");
                format!("❌ Failed to message {}: {}", contact, e)
            }
        }
    }

    async fn start_call(&self, contact: &str, is_video: bool) -> String {
        match self.ports.messenger.start_call(contact, is_video).await {
            Ok(()) => format!("📞 Calling {}...", contact),
            Err(MessengerError::CallButtonNotFound) => {
                tracing::warn!(contact, is_video, "Call button not found");
                "❌ Could not find the call button. Is the chat open?".to_string()
            }
            Err(e) => {
                tracing::warn!(error = %e, contact, "Call task failed");
                format!("Error: {}.", e)
            }
        }
    }
}

/// Adds `https://` unless the target already names a scheme.
fn website_url(target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        target.to_string()
    } else {
        format!("https://{}", target)
    }
}

fn file_listing(matches: &[FileMatch], preview: usize) -> String {
    let mut text = format!(
        "📂 I found {} matches. Here are the top ones:\n",
        matches.len()
    );
    for found in matches.iter().take(preview) {
        text.push_str(&format!(
            "- {} (In {})\n",
            found.name,
            found.directory.display()
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::ports::{
        DesktopError, EmailError, FileSearchError, ShellError, StorefrontError,
    };
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    // ----- Recording mocks -----

    #[derive(Default)]
    struct MockEmail {
        sent: Mutex<Vec<OutgoingEmail>>,
        fail: bool,
    }

    #[async_trait]
    impl EmailSender for MockEmail {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
            if self.fail {
                return Err(EmailError::NotConfigured);
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockStore {
        items: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Storefront for MockStore {
        async fn add_to_cart(&self, item: &str) -> Result<(), StorefrontError> {
            if self.fail {
                return Err(StorefrontError::element_timeout("css selector '#add-to-cart-button'"));
            }
            self.items.lock().unwrap().push(item.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockShell {
        urls: Mutex<Vec<String>>,
        paths: Mutex<Vec<PathBuf>>,
        spawned: Mutex<Vec<String>>,
        fail: bool,
    }

    impl MockShell {
        fn failure() -> ShellError {
            ShellError::Spawn {
                program: "sh".to_string(),
                message: "not found".to_string(),
            }
        }
    }

    #[async_trait]
    impl SystemShell for MockShell {
        async fn open_url(&self, url: &str) -> Result<(), ShellError> {
            if self.fail {
                return Err(Self::failure());
            }
            self.urls.lock().unwrap().push(url.to_string());
            Ok(())
        }

        async fn open_path(&self, path: &Path) -> Result<(), ShellError> {
            if self.fail {
                return Err(Self::failure());
            }
            self.paths.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        async fn spawn(&self, command_line: &str) -> Result<(), ShellError> {
            if self.fail {
                return Err(Self::failure());
            }
            self.spawned.lock().unwrap().push(command_line.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockFiles {
        matches: Vec<FileMatch>,
        fail: bool,
    }

    #[async_trait]
    impl FileFinder for MockFiles {
        async fn find(&self, _fragment: &str) -> Result<Vec<FileMatch>, FileSearchError> {
            if self.fail {
                return Err(FileSearchError::Io("permission denied".to_string()));
            }
            Ok(self.matches.clone())
        }
    }

    #[derive(Default)]
    struct MockMessenger {
        sent: Mutex<Vec<(String, String)>>,
        calls: Mutex<Vec<(String, bool)>>,
        no_button: bool,
        broken: bool,
    }

    #[async_trait]
    impl Messenger for MockMessenger {
        async fn send_message(&self, contact: &str, message: &str) -> Result<(), MessengerError> {
            if self.broken {
                return Err(DesktopError::Command("xdotool missing".to_string()).into());
            }
            self.sent
                .lock()
                .unwrap()
                .push((contact.to_string(), message.to_string()));
            Ok(())
        }

        async fn start_call(&self, contact: &str, is_video: bool) -> Result<(), MessengerError> {
            if self.no_button {
                return Err(MessengerError::CallButtonNotFound);
            }
            if self.broken {
                return Err(DesktopError::Command("xdotool missing".to_string()).into());
            }
            self.calls.lock().unwrap().push((contact.to_string(), is_video));
            Ok(())
        }
    }

    struct Fixture {
        ai: MockAIProvider,
        email: Arc<MockEmail>,
        store: Arc<MockStore>,
        shell: Arc<MockShell>,
        files: Arc<MockFiles>,
        messenger: Arc<MockMessenger>,
        config: DispatcherConfig,
    }

    impl Default for Fixture {
        fn default() -> Self {
            Self {
                ai: MockAIProvider::new(),
                email: Arc::new(MockEmail::default()),
                store: Arc::new(MockStore::default()),
                shell: Arc::new(MockShell::default()),
                files: Arc::new(MockFiles::default()),
                messenger: Arc::new(MockMessenger::default()),
                config: DispatcherConfig::default(),
            }
        }
    }

    impl Fixture {
        fn dispatcher(&self) -> TaskDispatcher {
            TaskDispatcher::new(
                TaskPorts {
                    ai: Arc::new(self.ai.clone()),
                    email: self.email.clone(),
                    storefront: self.store.clone(),
                    shell: self.shell.clone(),
                    files: self.files.clone(),
                    messenger: self.messenger.clone(),
                },
                self.config.clone(),
            )
        }
    }

    fn failing_shell() -> Arc<MockShell> {
        Arc::new(MockShell {
            fail: true,
            ..MockShell::default()
        })
    }

    mod email {
        use super::*;

        #[tokio::test]
        async fn success_reply() {
            let fx = Fixture::default();
            let reply = fx
                .dispatcher()
                .dispatch(&TaskCommand::SendEmail {
                    to: "bob@x.com".to_string(),
                    subject: "Meeting".to_string(),
                    body: "See you at 3".to_string(),
                })
                .await;

            assert_eq!(reply, "✅ Email sent successfully!");
            assert_eq!(
                fx.email.sent.lock().unwrap()[0],
                OutgoingEmail::new("bob@x.com", "Meeting", "See you at 3")
            );
        }

        #[tokio::test]
        async fn failure_reply() {
            let fx = Fixture {
                email: Arc::new(MockEmail {
                    fail: true,
                    ..MockEmail::default()
                }),
                ..Fixture::default()
            };
            let reply = fx
                .dispatcher()
                .dispatch(&TaskCommand::SendEmail {
                    to: "a".to_string(),
                    subject: "b".to_string(),
                    body: "c".to_string(),
                })
                .await;
            assert_eq!(reply, "Failed to send email.");
        }
    }

    mod question {
        use super::*;

        #[tokio::test]
        async fn returns_generated_text_with_prompt() {
            let fx = Fixture {
                ai: MockAIProvider::new().with_response("Use iterators."),
                config: DispatcherConfig {
                    system_prompt: Some("Answer briefly.".to_string()),
                    max_tokens: Some(300),
                    ..DispatcherConfig::default()
                },
                ..Fixture::default()
            };

            let reply = fx
                .dispatcher()
                .dispatch(&TaskCommand::AnswerQuestion {
                    question: "How do I loop?".to_string(),
                })
                .await;

            assert_eq!(reply, "Use iterators.");
            let call = &fx.ai.get_calls()[0];
            assert_eq!(call.last_user_message(), Some("How do I loop?"));
            assert_eq!(call.system_prompt.as_deref(), Some("Answer briefly."));
            assert_eq!(call.max_tokens, Some(300));
        }

        #[tokio::test]
        async fn provider_failure_is_degraded_reply() {
            let fx = Fixture {
                ai: MockAIProvider::new().with_error(MockError::AuthenticationFailed),
                ..Fixture::default()
            };
            let reply = fx
                .dispatcher()
                .dispatch(&TaskCommand::AnswerQuestion {
                    question: "?".to_string(),
                })
                .await;
            assert_eq!(reply, "Sorry, I'm having trouble thinking right now.");
        }
    }

    mod shopping {
        use super::*;

        #[tokio::test]
        async fn success_and_failure() {
            let fx = Fixture::default();
            let reply = fx
                .dispatcher()
                .dispatch(&TaskCommand::AddToCart {
                    item: "laptop".to_string(),
                })
                .await;
            assert_eq!(reply, "Added laptop to cart!");
            assert_eq!(*fx.store.items.lock().unwrap(), vec!["laptop"]);

            let broken = Fixture {
                store: Arc::new(MockStore {
                    fail: true,
                    ..MockStore::default()
                }),
                ..Fixture::default()
            };
            let reply = broken
                .dispatcher()
                .dispatch(&TaskCommand::AddToCart {
                    item: "laptop".to_string(),
                })
                .await;
            assert_eq!(
                reply,
                "Shopping Error: timed out waiting for css selector '#add-to-cart-button'"
            );
        }
    }

    mod apps {
        use super::*;

        fn open(name: &str) -> TaskCommand {
            TaskCommand::OpenApplication {
                name: name.to_string(),
            }
        }

        #[tokio::test]
        async fn known_app_uses_table_command() {
            let fx = Fixture::default();
            let reply = fx.dispatcher().dispatch(&open("Settings")).await;

            assert_eq!(reply, "✅ Opening settings for you.");
            assert_eq!(*fx.shell.spawned.lock().unwrap(), vec!["start ms-settings:"]);
        }

        #[tokio::test]
        async fn unknown_app_runs_literal_name() {
            let fx = Fixture::default();
            let reply = fx.dispatcher().dispatch(&open("gimp")).await;

            assert_eq!(reply, "🚀 Attempting to launch gimp...");
            assert_eq!(*fx.shell.spawned.lock().unwrap(), vec!["gimp"]);
        }

        #[tokio::test]
        async fn configured_apps_take_precedence() {
            let fx = Fixture {
                config: DispatcherConfig {
                    apps: HashMap::from([("notepad".to_string(), "gedit".to_string())]),
                    ..DispatcherConfig::default()
                },
                ..Fixture::default()
            };
            let reply = fx.dispatcher().dispatch(&open("notepad")).await;

            assert_eq!(reply, "✅ Opening notepad for you.");
            assert_eq!(*fx.shell.spawned.lock().unwrap(), vec!["gedit"]);
        }

        #[tokio::test]
        async fn launch_failure_reply() {
            let fx = Fixture {
                shell: failing_shell(),
                ..Fixture::default()
            };
            let reply = fx.dispatcher().dispatch(&open("chrome")).await;
            assert_eq!(
                reply,
                "❌ Sorry, I couldn't open chrome. Error: failed to start sh: not found"
            );
        }
    }

    mod web {
        use super::*;

        #[tokio::test]
        async fn youtube_query_is_percent_encoded() {
            let fx = Fixture::default();
            let reply = fx
                .dispatcher()
                .dispatch(&TaskCommand::SearchYoutube {
                    query: "lofi beats & rain".to_string(),
                })
                .await;

            assert_eq!(reply, "📺 Searching YouTube for 'lofi beats & rain'...");
            assert_eq!(
                fx.shell.urls.lock().unwrap()[0],
                "https://www.youtube.com/results?search_query=lofi%20beats%20%26%20rain"
            );
        }

        #[tokio::test]
        async fn website_gets_scheme() {
            let fx = Fixture::default();
            let reply = fx
                .dispatcher()
                .dispatch(&TaskCommand::OpenWebsite {
                    target: "example.com".to_string(),
                })
                .await;
            assert_eq!(reply, "🌐 Opening https://example.com...");
        }

        #[test]
        fn website_url_keeps_existing_scheme() {
            assert_eq!(website_url("http://intranet"), "http://intranet");
            assert_eq!(website_url("rust-lang.org"), "https://rust-lang.org");
        }

        #[tokio::test]
        async fn failures_name_the_error() {
            let fx = Fixture {
                shell: failing_shell(),
                ..Fixture::default()
            };
            let dispatcher = fx.dispatcher();
            let youtube = dispatcher
                .dispatch(&TaskCommand::SearchYoutube {
                    query: "x".to_string(),
                })
                .await;
            let website = dispatcher
                .dispatch(&TaskCommand::OpenWebsite {
                    target: "x".to_string(),
                })
                .await;
            assert_eq!(youtube, "❌ Failed to search YouTube: failed to start sh: not found");
            assert_eq!(website, "❌ Failed to open website: failed to start sh: not found");
        }
    }

    mod files {
        use super::*;

        fn found(name: &str, dir: &str) -> FileMatch {
            FileMatch {
                name: name.to_string(),
                directory: PathBuf::from(dir),
            }
        }

        fn search(fragment: &str) -> TaskCommand {
            TaskCommand::SearchFiles {
                fragment: fragment.to_string(),
            }
        }

        #[tokio::test]
        async fn lists_top_three_and_opens_best_folder() {
            let fx = Fixture {
                files: Arc::new(MockFiles {
                    matches: vec![
                        found("resume.pdf", "/home/u/Documents"),
                        found("resume.docx", "/home/u/Downloads"),
                        found("resume_old.pdf", "/home/u/Downloads/old"),
                        found("resume_2019.pdf", "/home/u/Desktop"),
                    ],
                    fail: false,
                }),
                ..Fixture::default()
            };

            let reply = fx.dispatcher().dispatch(&search("resume")).await;

            assert_eq!(
                reply,
                "📂 I found 4 matches. Here are the top ones:\n\
                 - resume.pdf (In /home/u/Documents)\n\
                 - resume.docx (In /home/u/Downloads)\n\
                 - resume_old.pdf (In /home/u/Downloads/old)\n\
                 \n📂 Opening the folder for the best match..."
            );
            assert_eq!(
                *fx.shell.paths.lock().unwrap(),
                vec![PathBuf::from("/home/u/Documents")]
            );
        }

        #[tokio::test]
        async fn no_match_reply() {
            let fx = Fixture::default();
            let reply = fx.dispatcher().dispatch(&search("unicorn")).await;
            assert_eq!(
                reply,
                "📂 I couldn't find any files matching 'unicorn' in your common folders."
            );
        }

        #[tokio::test]
        async fn search_failure_reply() {
            let fx = Fixture {
                files: Arc::new(MockFiles {
                    matches: Vec::new(),
                    fail: true,
                }),
                ..Fixture::default()
            };
            let reply = fx.dispatcher().dispatch(&search("x")).await;
            assert_eq!(reply, "❌ Error searching for files: io error: permission denied");
        }

        #[tokio::test]
        async fn folder_open_failure_keeps_listing() {
            let fx = Fixture {
                files: Arc::new(MockFiles {
                    matches: vec![found("a.txt", "/tmp")],
                    fail: false,
                }),
                shell: failing_shell(),
                ..Fixture::default()
            };
            let reply = fx.dispatcher().dispatch(&search("a")).await;
            assert!(reply.starts_with("📂 I found 1 matches."));
        }
    }

    mod messaging {
        use super::*;

        #[tokio::test]
        async fn message_success_and_failure() {
            let fx = Fixture::default();
            let reply = fx
                .dispatcher()
                .dispatch(&TaskCommand::SendChatMessage {
                    contact: "mom".to_string(),
                    message: "running late".to_string(),
                })
                .await;
            assert_eq!(reply, "✅ Message sent to mom");
            assert_eq!(
                fx.messenger.sent.lock().unwrap()[0],
                ("mom".to_string(), "running late".to_string())
            );

            let broken = Fixture {
                messenger: Arc::new(MockMessenger {
                    broken: true,
                    ..MockMessenger::default()
                }),
                ..Fixture::default()
            };
            let reply = broken
                .dispatcher()
                .dispatch(&TaskCommand::SendChatMessage {
                    contact: "mom".to_string(),
                    message: "hi".to_string(),
                })
                .await;
            assert_eq!(
                reply,
                "❌ Failed to message mom: desktop command failed: xdotool missing"
            );
        }

        #[tokio::test]
        async fn call_replies() {
            let fx = Fixture::default();
            let reply = fx
                .dispatcher()
                .dispatch(&TaskCommand::StartCall {
                    contact: "Raj".to_string(),
                    is_video: true,
                })
                .await;
            assert_eq!(reply, "📞 Calling Raj...");
            assert_eq!(fx.messenger.calls.lock().unwrap()[0], ("Raj".to_string(), true));

            let no_button = Fixture {
                messenger: Arc::new(MockMessenger {
                    no_button: true,
                    ..MockMessenger::default()
                }),
                ..Fixture::default()
            };
            let reply = no_button
                .dispatcher()
                .dispatch(&TaskCommand::StartCall {
                    contact: "Raj".to_string(),
                    is_video: false,
                })
                .await;
            assert_eq!(reply, "❌ Could not find the call button. Is the chat open?");

            let broken = Fixture {
                messenger: Arc::new(MockMessenger {
                    broken: true,
                    ..MockMessenger::default()
                }),
                ..Fixture::default()
            };
            let reply = broken
                .dispatcher()
                .dispatch(&TaskCommand::StartCall {
                    contact: "Raj".to_string(),
                    is_video: false,
                })
                .await;
            assert_eq!(reply, "Error: desktop command failed: xdotool missing.");
        }
    }
}
