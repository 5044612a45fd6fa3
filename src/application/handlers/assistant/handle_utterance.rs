//! HandleUtteranceHandler - Command handler for one chat turn.

use std::sync::Arc;

use super::TaskDispatcher;
use crate::domain::assistant::{decide, Outcome};
use crate::domain::foundation::{ConversationId, Timestamp, TranscriptId};
use crate::domain::transcript::{transcript_file_name, Sender, TranscriptEntry};
use crate::ports::{SessionStore, SessionStoreError, TranscriptStore};

/// Command carrying one user utterance.
#[derive(Debug, Clone)]
pub struct HandleUtteranceCommand {
    pub conversation_id: ConversationId,
    pub message: String,
}

/// Result of a handled turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleUtteranceResult {
    pub conversation_id: ConversationId,
    pub reply: String,
}

#[derive(Debug, thiserror::Error)]
pub enum HandleUtteranceError {
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

/// Handler for chat turns.
pub struct HandleUtteranceHandler {
    sessions: Arc<dyn SessionStore>,
    transcripts: Arc<dyn TranscriptStore>,
    dispatcher: Arc<TaskDispatcher>,
}

impl HandleUtteranceHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        transcripts: Arc<dyn TranscriptStore>,
        dispatcher: Arc<TaskDispatcher>,
    ) -> Self {
        Self {
            sessions,
            transcripts,
            dispatcher,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleUtteranceCommand,
    ) -> Result<HandleUtteranceResult, HandleUtteranceError> {
        // 1. Load the conversation
        let mut record = self.sessions.load(&cmd.conversation_id).await?;

        // 2. Record the user line, naming the transcript on the first message
        if record.transcript.is_none() {
            record.transcript = match transcript_file_name(&cmd.message, Timestamp::now()) {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!(error = %e, "Could not name transcript");
                    None
                }
            };
        }
        self.record(record.transcript.as_ref(), Sender::User, &cmd.message)
            .await;

        // 3. Route, and execute when the task is complete
        let transition = decide(&cmd.message, &record.dialogue);
        let reply = match &transition.outcome {
            Outcome::Reply(text) => text.clone(),
            Outcome::Dispatch(command) => self.dispatcher.dispatch(command).await,
        };

        // 4. Record the reply and persist the new state
        self.record(record.transcript.as_ref(), Sender::Thambi, &reply)
            .await;
        record.dialogue = transition.state;
        self.sessions.save(&cmd.conversation_id, record).await?;

        Ok(HandleUtteranceResult {
            conversation_id: cmd.conversation_id,
            reply,
        })
    }

    /// Appends a line; transcript failures never fail the turn.
    async fn record(&self, transcript: Option<&TranscriptId>, sender: Sender, text: &str) {
        let Some(id) = transcript else {
            return;
        };
        let entry = TranscriptEntry::new(sender, text, Timestamp::now());
        if let Err(e) = self.transcripts.append(id, entry).await {
            tracing::warn!(error = %e, transcript = %id, "Failed to record transcript line");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::handlers::assistant::{DispatcherConfig, TaskPorts};
    use crate::domain::assistant::ActiveTask;
    use crate::ports::{
        EmailError, EmailSender, FileFinder, FileMatch, FileSearchError, Messenger,
        MessengerError, OutgoingEmail, SessionRecord, ShellError, Storefront, StorefrontError,
        SystemShell, TranscriptStoreError,
    };
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::Mutex;

    // ----- Mock transcript store -----

    #[derive(Default)]
    struct MockTranscripts {
        lines: Mutex<HashMap<String, Vec<TranscriptEntry>>>,
        fail: bool,
    }

    impl MockTranscripts {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn only_file(&self) -> (String, Vec<TranscriptEntry>) {
            let lines = self.lines.lock().unwrap();
            assert_eq!(lines.len(), 1);
            let (name, entries) = lines.iter().next().unwrap();
            (name.clone(), entries.clone())
        }
    }

    #[async_trait]
    impl TranscriptStore for MockTranscripts {
        async fn append(
            &self,
            id: &TranscriptId,
            entry: TranscriptEntry,
        ) -> Result<(), TranscriptStoreError> {
            if self.fail {
                return Err(TranscriptStoreError::Io("disk full".to_string()));
            }
            self.lines
                .lock()
                .unwrap()
                .entry(id.as_str().to_string())
                .or_default()
                .push(entry);
            Ok(())
        }

        async fn list(&self) -> Result<Vec<TranscriptId>, TranscriptStoreError> {
            Ok(Vec::new())
        }

        async fn load(
            &self,
            id: &TranscriptId,
        ) -> Result<Vec<TranscriptEntry>, TranscriptStoreError> {
            Err(TranscriptStoreError::NotFound(id.clone()))
        }

        async fn delete(&self, id: &TranscriptId) -> Result<(), TranscriptStoreError> {
            Err(TranscriptStoreError::NotFound(id.clone()))
        }
    }

    // ----- Task port mocks -----

    #[derive(Default)]
    struct Recorder {
        emails: Mutex<Vec<OutgoingEmail>>,
        cart: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl EmailSender for Recorder {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
            self.emails.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    #[async_trait]
    impl Storefront for Recorder {
        async fn add_to_cart(&self, item: &str) -> Result<(), StorefrontError> {
            self.cart.lock().unwrap().push(item.to_string());
            Ok(())
        }
    }

    #[async_trait]
    impl SystemShell for Recorder {
        async fn open_url(&self, _url: &str) -> Result<(), ShellError> {
            Ok(())
        }
        async fn open_path(&self, _path: &Path) -> Result<(), ShellError> {
            Ok(())
        }
        async fn spawn(&self, _command_line: &str) -> Result<(), ShellError> {
            Ok(())
        }
    }

    #[async_trait]
    impl FileFinder for Recorder {
        async fn find(&self, _fragment: &str) -> Result<Vec<FileMatch>, FileSearchError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl Messenger for Recorder {
        async fn send_message(&self, _contact: &str, _message: &str) -> Result<(), MessengerError> {
            Ok(())
        }
        async fn start_call(&self, _contact: &str, _is_video: bool) -> Result<(), MessengerError> {
            Err(MessengerError::CallButtonNotFound)
        }
    }

    struct Fixture {
        sessions: Arc<InMemorySessionStore>,
        transcripts: Arc<MockTranscripts>,
        tasks: Arc<Recorder>,
        handler: HandleUtteranceHandler,
    }

    fn fixture_with(transcripts: MockTranscripts) -> Fixture {
        let sessions = Arc::new(InMemorySessionStore::new());
        let transcripts = Arc::new(transcripts);
        let tasks = Arc::new(Recorder::default());
        let dispatcher = TaskDispatcher::new(
            TaskPorts {
                ai: Arc::new(MockAIProvider::new()),
                email: tasks.clone(),
                storefront: tasks.clone(),
                shell: tasks.clone(),
                files: tasks.clone(),
                messenger: tasks.clone(),
            },
            DispatcherConfig::default(),
        );
        let handler = HandleUtteranceHandler::new(
            sessions.clone(),
            transcripts.clone(),
            Arc::new(dispatcher),
        );
        Fixture {
            sessions,
            transcripts,
            tasks,
            handler,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(MockTranscripts::default())
    }

    fn say(message: &str) -> HandleUtteranceCommand {
        HandleUtteranceCommand {
            conversation_id: ConversationId::shared(),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn direct_command_dispatches_same_turn() {
        let fx = fixture();
        let result = fx.handler.handle(say("buy laptop")).await.unwrap();

        assert_eq!(result.reply, "Added laptop to cart!");
        assert_eq!(result.conversation_id, ConversationId::shared());
        assert_eq!(*fx.tasks.cart.lock().unwrap(), vec!["laptop"]);
    }

    #[tokio::test]
    async fn multi_turn_email_persists_state_between_turns() {
        let fx = fixture();
        for message in ["email", "bob@x.com", "Meeting"] {
            fx.handler.handle(say(message)).await.unwrap();
        }
        let stored = fx.sessions.load(&ConversationId::shared()).await.unwrap();
        assert_eq!(stored.dialogue.active_task(), ActiveTask::Email);

        let result = fx.handler.handle(say("See you at 3")).await.unwrap();
        assert_eq!(result.reply, "✅ Email sent successfully!");
        assert_eq!(
            fx.tasks.emails.lock().unwrap()[0],
            OutgoingEmail::new("bob@x.com", "Meeting", "See you at 3")
        );

        let stored = fx.sessions.load(&ConversationId::shared()).await.unwrap();
        assert!(stored.dialogue.is_idle());
    }

    #[tokio::test]
    async fn conversations_are_independent() {
        let fx = fixture();
        fx.handler.handle(say("shop")).await.unwrap();

        let other = HandleUtteranceCommand {
            conversation_id: ConversationId::parse("kitchen").unwrap(),
            message: "red shoes".to_string(),
        };
        let result = fx.handler.handle(other).await.unwrap();
        assert_ne!(result.reply, "Added red shoes to cart!");

        let result = fx.handler.handle(say("red shoes")).await.unwrap();
        assert_eq!(result.reply, "Added red shoes to cart!");
    }

    #[tokio::test]
    async fn transcript_named_after_first_message() {
        let fx = fixture();
        let first = fx.handler.handle(say("hello there")).await.unwrap();
        fx.handler.handle(say("buy milk")).await.unwrap();

        let (name, entries) = fx.transcripts.only_file();
        assert!(name.starts_with("hello there_"));
        assert!(name.ends_with(".json"));
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].sender, Sender::User);
        assert_eq!(entries[0].text, "hello there");
        assert_eq!(entries[1].sender, Sender::Thambi);
        assert_eq!(entries[1].text, first.reply);
        assert_eq!(entries[3].text, "Added milk to cart!");
    }

    #[tokio::test]
    async fn transcript_failures_do_not_fail_the_turn() {
        let fx = fixture_with(MockTranscripts::failing());
        let result = fx.handler.handle(say("buy laptop")).await.unwrap();
        assert_eq!(result.reply, "Added laptop to cart!");
    }

    #[tokio::test]
    async fn handler_failure_becomes_reply_and_idles() {
        let fx = fixture();
        let result = fx.handler.handle(say("call Raj")).await.unwrap();

        assert_eq!(
            result.reply,
            "❌ Could not find the call button. Is the chat open?"
        );
        let stored = fx.sessions.load(&ConversationId::shared()).await.unwrap();
        assert_eq!(stored.dialogue, SessionRecord::default().dialogue);
    }
}
