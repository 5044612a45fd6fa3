//! Adapters - Implementations of port interfaces.
//!
//! Each adapter connects a port to a concrete technology:
//!
//! - `ai` - Anthropic messages API (and a scripted mock)
//! - `email` - Resend HTTP API
//! - `shopping` - browser automation over WebDriver
//! - `system` - child processes, file search and desktop automation
//! - `storage` - in-memory sessions and JSON transcript files
//! - `http` - the axum REST surface

pub mod ai;
pub mod email;
pub mod http;
pub mod shopping;
pub mod storage;
pub mod system;
