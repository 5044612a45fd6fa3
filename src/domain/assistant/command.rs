//! Fully resolved task commands handed to the task handlers.

use serde::Serialize;

use super::dialogue::DialogueState;
use super::task::{ActiveTask, Slot};

/// One handler invocation with every argument known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum TaskCommand {
    SendEmail {
        to: String,
        subject: String,
        body: String,
    },
    AnswerQuestion {
        question: String,
    },
    AddToCart {
        item: String,
    },
    OpenApplication {
        name: String,
    },
    SearchYoutube {
        query: String,
    },
    OpenWebsite {
        target: String,
    },
    SearchFiles {
        fragment: String,
    },
    SendChatMessage {
        contact: String,
        message: String,
    },
    StartCall {
        contact: String,
        is_video: bool,
    },
}

impl TaskCommand {
    /// Builds the command for a multi-turn task whose slots are all filled.
    ///
    /// Returns `None` if the state is idle or still missing a slot.
    pub fn from_completed(state: &DialogueState) -> Option<Self> {
        if !state.is_complete() {
            return None;
        }
        let text = |slot| state.text(slot).unwrap_or_default().to_string();

        let command = match state.active_task() {
            ActiveTask::None => return None,
            ActiveTask::Shopping => TaskCommand::AddToCart {
                item: text(Slot::Item),
            },
            ActiveTask::Email => TaskCommand::SendEmail {
                to: text(Slot::EmailTo),
                subject: text(Slot::Subject),
                body: text(Slot::Body),
            },
            ActiveTask::CodeDoubt => TaskCommand::AnswerQuestion {
                question: text(Slot::Question),
            },
            ActiveTask::WhatsappMessage => TaskCommand::SendChatMessage {
                contact: text(Slot::Contact),
                message: text(Slot::Body),
            },
            ActiveTask::WhatsappCall => TaskCommand::StartCall {
                contact: text(Slot::Contact),
                is_video: state.flag(Slot::IsVideo),
            },
        };
        Some(command)
    }

    /// Short label used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            TaskCommand::SendEmail { .. } => "send_email",
            TaskCommand::AnswerQuestion { .. } => "answer_question",
            TaskCommand::AddToCart { .. } => "add_to_cart",
            TaskCommand::OpenApplication { .. } => "open_application",
            TaskCommand::SearchYoutube { .. } => "search_youtube",
            TaskCommand::OpenWebsite { .. } => "open_website",
            TaskCommand::SearchFiles { .. } => "search_files",
            TaskCommand::SendChatMessage { .. } => "send_chat_message",
            TaskCommand::StartCall { .. } => "start_call",
        }
    }
}
