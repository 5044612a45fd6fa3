//! Chat transcripts kept as history files.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, TranscriptId, ValidationError};

/// Longest name prefix taken from the first message.
pub const NAME_PREFIX_MAX_CHARS: usize = 40;

/// Prefix used when the first message has nothing usable in it.
pub const UNTITLED: &str = "Untitled_Chat";

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Thambi,
}

/// One line of a transcript as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub sender: Sender,
    pub text: String,
    /// Wall-clock label such as `02:30 PM`.
    pub timestamp: String,
}

impl TranscriptEntry {
    pub fn new(sender: Sender, text: impl Into<String>, at: Timestamp) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: at.clock_label(),
        }
    }
}

/// Strips a message down to something safe inside a file name.
///
/// Keeps word characters, `-` and spaces (other whitespace becomes a
/// space), trims the ends and cuts to [`NAME_PREFIX_MAX_CHARS`].
pub fn sanitize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    cleaned.trim().chars().take(NAME_PREFIX_MAX_CHARS).collect()
}

/// Names the transcript file started by `first_message` at `started`.
pub fn transcript_file_name(
    first_message: &str,
    started: Timestamp,
) -> Result<TranscriptId, ValidationError> {
    let prefix = sanitize(first_message);
    let prefix = if prefix.is_empty() { UNTITLED } else { prefix.as_str() };
    TranscriptId::parse(format!(
        "{}_{}{}",
        prefix,
        started.file_stamp(),
        TranscriptId::EXTENSION
    ))
}
