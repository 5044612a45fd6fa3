//! Domain layer containing the assistant's business rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assistant` - Dialogue state, trigger recognition and routing
//! - `transcript` - Chat history entries and file naming

pub mod assistant;
pub mod foundation;
pub mod transcript;
