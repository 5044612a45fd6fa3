//! Multi-turn tasks and the slots they collect.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The multi-turn task a conversation is waiting on, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTask {
    /// Idle: the next utterance is matched against trigger phrases.
    #[default]
    None,
    Shopping,
    Email,
    CodeDoubt,
    WhatsappMessage,
    WhatsappCall,
}

impl ActiveTask {
    /// Slots the task needs, in the order they are asked for.
    ///
    /// Flags set when the task starts (such as `is_video`) are not listed.
    pub fn required_slots(&self) -> &'static [Slot] {
        match self {
            ActiveTask::None => &[],
            ActiveTask::Shopping => &[Slot::Item],
            ActiveTask::Email => &[Slot::EmailTo, Slot::Subject, Slot::Body],
            ActiveTask::CodeDoubt => &[Slot::Question],
            ActiveTask::WhatsappMessage => &[Slot::Contact, Slot::Body],
            ActiveTask::WhatsappCall => &[Slot::Contact],
        }
    }

    /// Returns true if `slot` may be stored while this task is active.
    pub fn accepts(&self, slot: Slot) -> bool {
        self.required_slots().contains(&slot)
            || (*self == ActiveTask::WhatsappCall && slot == Slot::IsVideo)
    }

    /// Returns true when no task is waiting.
    pub fn is_idle(&self) -> bool {
        matches!(self, ActiveTask::None)
    }

    const ALL: [ActiveTask; 6] = [
        ActiveTask::None,
        ActiveTask::Shopping,
        ActiveTask::Email,
        ActiveTask::CodeDoubt,
        ActiveTask::WhatsappMessage,
        ActiveTask::WhatsappCall,
    ];
}

impl fmt::Display for ActiveTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActiveTask::None => "none",
            ActiveTask::Shopping => "shopping",
            ActiveTask::Email => "email",
            ActiveTask::CodeDoubt => "code_doubt",
            ActiveTask::WhatsappMessage => "whatsapp_message",
            ActiveTask::WhatsappCall => "whatsapp_call",
        };
        write!(f, "{}", s)
    }
}

impl StateMachine for ActiveTask {
    // A task can only start from idle, keep collecting slots, or go back to idle.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.is_idle() || target.is_idle() || self == target
    }

    fn valid_transitions(&self) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|target| self.can_transition_to(target))
            .collect()
    }
}

/// Named piece of information a task collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Item,
    EmailTo,
    Subject,
    Body,
    Question,
    Contact,
    IsVideo,
}

impl Slot {
    /// Wire name of the slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Item => "item",
            Slot::EmailTo => "email_to",
            Slot::Subject => "subject",
            Slot::Body => "body",
            Slot::Question => "question",
            Slot::Contact => "contact",
            Slot::IsVideo => "is_video",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A collected slot value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Text(String),
    Flag(bool),
}

impl SlotValue {
    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SlotValue::Text(text) => Some(text),
            SlotValue::Flag(_) => None,
        }
    }

    /// Returns the flag, if this is a flag value.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            SlotValue::Flag(flag) => Some(*flag),
            SlotValue::Text(_) => None,
        }
    }
}

impl From<&str> for SlotValue {
    fn from(text: &str) -> Self {
        SlotValue::Text(text.to_string())
    }
}

impl From<String> for SlotValue {
    fn from(text: String) -> Self {
        SlotValue::Text(text)
    }
}

impl From<bool> for SlotValue {
    fn from(flag: bool) -> Self {
        SlotValue::Flag(flag)
    }
}
