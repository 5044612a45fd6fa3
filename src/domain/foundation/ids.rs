//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifies one conversation whose dialogue state is tracked separately.
///
/// Clients that never send an id share the [`ConversationId::shared`]
/// conversation, which reproduces the single-user behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConversationId(String);

impl ConversationId {
    /// Maximum accepted length.
    pub const MAX_LEN: usize = 64;

    const SHARED: &'static str = "default";

    /// The conversation used when the caller does not name one.
    pub fn shared() -> Self {
        Self(Self::SHARED.to_string())
    }

    /// Validates and wraps a client supplied id.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("conversation_id"));
        }
        if raw.len() > Self::MAX_LEN {
            return Err(ValidationError::too_long(
                "conversation_id",
                Self::MAX_LEN,
                raw.len(),
            ));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::invalid_format(
                "conversation_id",
                "only letters, digits, '-' and '_' are allowed",
            ));
        }
        Ok(Self(raw))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::shared()
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConversationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ConversationId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ConversationId> for String {
    fn from(id: ConversationId) -> Self {
        id.0
    }
}

/// File name of one saved chat transcript inside the history folder.
///
/// Never contains path separators, so it can be joined onto the folder
/// without escaping it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TranscriptId(String);

impl TranscriptId {
    /// Required file extension.
    pub const EXTENSION: &'static str = ".json";

    /// Validates a transcript file name.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("transcript"));
        }
        if raw.contains('/') || raw.contains('\\') || raw.contains("..") || raw.contains('\0') {
            return Err(ValidationError::invalid_format(
                "transcript",
                "must be a plain file name",
            ));
        }
        if !raw.ends_with(Self::EXTENSION) || raw.len() == Self::EXTENSION.len() {
            return Err(ValidationError::invalid_format(
                "transcript",
                "must end with .json",
            ));
        }
        Ok(Self(raw))
    }

    /// Returns the file name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TranscriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TranscriptId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TranscriptId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TranscriptId> for String {
    fn from(id: TranscriptId) -> Self {
        id.0
    }
}
