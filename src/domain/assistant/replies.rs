//! Fixed reply texts and clarifying questions.

use super::task::{ActiveTask, Slot};

pub const GREETING: &str = "Hello! I'm Thambi AI. How can I help you today?";

pub const FALLBACK: &str =
    "I'm not sure how to help with that. Try asking to 'send an email', 'shop', or 'solve a doubt'.";

pub const ASK_ITEM: &str = "🛒 What do you want to buy? (I will search Amazon for you)";
pub const ASK_EMAIL_TO: &str = "👤 To whom should I send the email?";
pub const ASK_SUBJECT: &str = "📬 What is the subject?";
pub const ASK_MESSAGE: &str = "💬 What is the message?";
pub const ASK_QUESTION: &str = "🤔 What is your question?";
pub const ASK_MESSAGE_CONTACT: &str = "👤 Who do you want to message?";
pub const ASK_CALL_CONTACT: &str = "👤 Who should I call?";
pub const ASK_APP: &str = "🖥️ Which app would you like me to open?";
pub const ASK_VIDEO: &str = "📺 What would you like to watch on YouTube?";
pub const ASK_WEBSITE: &str = "🌐 Which website should I open?";
pub const ASK_FILE: &str = "📂 What is the name of the file?";

/// Question asked when `slot` is the next thing `task` needs.
pub fn question_for(task: ActiveTask, slot: Slot) -> &'static str {
    match (task, slot) {
        (ActiveTask::Shopping, _) => ASK_ITEM,
        (ActiveTask::Email, Slot::EmailTo) => ASK_EMAIL_TO,
        (ActiveTask::Email, Slot::Subject) => ASK_SUBJECT,
        (ActiveTask::CodeDoubt, _) => ASK_QUESTION,
        (ActiveTask::WhatsappMessage, Slot::Contact) => ASK_MESSAGE_CONTACT,
        (ActiveTask::WhatsappCall, _) => ASK_CALL_CONTACT,
        _ => ASK_MESSAGE,
    }
}

/// Question asked when a message task starts with the contact already known.
pub fn ask_message_for(contact: &str) -> String {
    format!("💬 What message should I send to {}?", contact)
}
