//! State machine trait for small lifecycle enums.
//!
//! Gives dialogue-level enums (such as the active task of a conversation)
//! a single place to declare which moves are legal.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors list their legal moves and get a validated
/// `transition_to` for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for ActiveTask {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (None, _) | (_, None)) || self == target
///     }
///     // ...
/// }
///
/// let next = state.active_task().transition_to(ActiveTask::Email)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
