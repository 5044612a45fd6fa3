//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Immutable point in time, in the server's local zone.
///
/// Transcripts show wall-clock times to the person chatting, so local
/// time is kept rather than UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Local>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Local::now())
    }

    /// Creates a timestamp from a local DateTime.
    pub fn from_datetime(dt: DateTime<Local>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Local> {
        &self.0
    }

    /// Clock time shown next to a transcript line, e.g. `02:30 PM`.
    pub fn clock_label(&self) -> String {
        self.0.format("%I:%M %p").to_string()
    }

    /// Stamp used in transcript file names, e.g. `2026-01-14_14-30-00`.
    pub fn file_stamp(&self) -> String {
        self.0.format("%Y-%m-%d_%H-%M-%S").to_string()
    }
}
