//! Assistant domain: dialogue state, trigger recognition and routing.
//!
//! - `task` - multi-turn tasks and their slots
//! - `dialogue` - per-conversation state
//! - `triggers` - ordered trigger phrase table
//! - `extractor` - argument extraction per trigger
//! - `command` - resolved commands for the dispatcher
//! - `replies` - fixed reply texts
//! - `router` - the routing decision for one turn

mod command;
mod dialogue;
mod extractor;
pub mod replies;
mod router;
mod task;
mod triggers;

pub use command::TaskCommand;
pub use dialogue::DialogueState;
pub use extractor::{extractor_for, ArgumentExtractor};
pub use router::{decide, Outcome, Transition};
pub use task::{ActiveTask, Slot, SlotValue};
pub use triggers::{normalize, recognize, Matcher, TriggerKind, TriggerRule, TRIGGER_RULES};
