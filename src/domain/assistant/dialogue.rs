//! Per-conversation dialogue state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::task::{ActiveTask, Slot, SlotValue};
use crate::domain::foundation::{StateMachine, ValidationError};

/// Which multi-turn task is waiting and what it has collected so far.
///
/// Invariant: an idle state never holds slots. The only ways to change a
/// state are the methods below, all of which keep that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialogueState {
    active_task: ActiveTask,
    slots: BTreeMap<Slot, SlotValue>,
}

impl DialogueState {
    /// Creates an idle state.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Starts a task from idle with any slots already known.
    ///
    /// Fails when a prefilled slot does not belong to `task`.
    pub fn begin(
        task: ActiveTask,
        prefilled: impl IntoIterator<Item = (Slot, SlotValue)>,
    ) -> Result<Self, ValidationError> {
        let active_task = ActiveTask::None.transition_to(task)?;
        if active_task.is_idle() {
            return Ok(Self::idle());
        }
        let mut slots = BTreeMap::new();
        for (slot, value) in prefilled {
            if !active_task.accepts(slot) {
                return Err(ValidationError::invalid_format(
                    "slot",
                    format!("{} is not collected by {}", slot, active_task),
                ));
            }
            slots.insert(slot, value);
        }
        Ok(Self { active_task, slots })
    }

    /// Starts a task from idle with nothing collected yet.
    pub fn start(task: ActiveTask) -> Result<Self, ValidationError> {
        Self::begin(task, Vec::new())
    }

    pub fn active_task(&self) -> ActiveTask {
        self.active_task
    }

    pub fn is_idle(&self) -> bool {
        self.active_task.is_idle()
    }

    pub fn slots(&self) -> &BTreeMap<Slot, SlotValue> {
        &self.slots
    }

    /// Returns a collected slot value.
    pub fn slot(&self, slot: Slot) -> Option<&SlotValue> {
        self.slots.get(&slot)
    }

    /// Returns a collected text slot.
    pub fn text(&self, slot: Slot) -> Option<&str> {
        self.slot(slot).and_then(SlotValue::as_text)
    }

    /// Returns a collected flag, `false` when never set.
    pub fn flag(&self, slot: Slot) -> bool {
        self.slot(slot).and_then(SlotValue::as_flag).unwrap_or(false)
    }

    /// The first required slot of the active task that is still empty.
    pub fn next_missing_slot(&self) -> Option<Slot> {
        self.active_task
            .required_slots()
            .iter()
            .copied()
            .find(|slot| !self.slots.contains_key(slot))
    }

    /// Returns true once every required slot has a value.
    pub fn is_complete(&self) -> bool {
        !self.is_idle() && self.next_missing_slot().is_none()
    }

    /// Stores `value` in the next missing slot and returns that slot.
    ///
    /// Returns `None` (and changes nothing) when idle or already complete.
    pub fn fill_next(&mut self, value: impl Into<SlotValue>) -> Option<Slot> {
        let slot = self.next_missing_slot()?;
        self.slots.insert(slot, value.into());
        Some(slot)
    }

    /// Returns to idle, dropping every collected slot.
    pub fn reset(&mut self) {
        self.active_task = ActiveTask::None;
        self.slots.clear();
    }
}
