//! Thambi - voice/text assistant backend
//!
//! Routes free-form utterances to tasks (email, questions, shopping, app
//! launching, web and file search, WhatsApp) through a small dialogue state
//! machine that asks for missing details one at a time.
//!
//! Layout follows a ports-and-adapters split:
//!
//! - [`domain`] - triggers, extraction, dialogue state and routing (no I/O)
//! - [`ports`] - traits for everything outside the process
//! - [`application`] - handlers that run a turn and execute tasks
//! - [`adapters`] - concrete ports plus the HTTP surface
//! - [`config`] - typed configuration from `THAMBI__*` variables

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
