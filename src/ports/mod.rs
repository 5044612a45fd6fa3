//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Task Ports
//!
//! - `AIProvider` - Answers free-form questions
//! - `EmailSender` - Sends email
//! - `Storefront` - Adds items to a shopping cart
//! - `SystemShell` - Opens URLs, folders and programs
//! - `FileFinder` - Searches local files by name
//! - `DesktopAutomation` - Keyboard, mouse and window focus
//! - `Messenger` - Chat messages and calls
//!
//! ## Conversation Ports
//!
//! - `SessionStore` - Dialogue state per conversation
//! - `TranscriptStore` - Chat history files

mod ai_provider;
mod desktop;
mod email_sender;
mod file_finder;
mod messenger;
mod session_store;
mod storefront;
mod system_shell;
mod transcript_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, MessageRole,
};
pub use desktop::{DesktopAutomation, DesktopError};
pub use email_sender::{EmailError, EmailSender, OutgoingEmail};
pub use file_finder::{FileFinder, FileMatch, FileSearchError};
pub use messenger::{Messenger, MessengerError};
pub use session_store::{SessionRecord, SessionStore, SessionStoreError};
pub use storefront::{Storefront, StorefrontError};
pub use system_shell::{ShellError, SystemShell};
pub use transcript_store::{TranscriptStore, TranscriptStoreError};
