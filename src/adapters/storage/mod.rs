//! Storage Adapters
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Dialogue state per conversation, in memory
//! - **FileTranscriptStore** - Chat transcripts as JSON files on disk

mod file_transcript_store;
mod in_memory_session_store;

pub use file_transcript_store::FileTranscriptStore;
pub use in_memory_session_store::InMemorySessionStore;
