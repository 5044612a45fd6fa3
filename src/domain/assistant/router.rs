//! Conversation routing.
//!
//! [`decide`] looks at one utterance and the current [`DialogueState`] and
//! returns what to do next: answer with a fixed text, or hand a fully
//! resolved [`TaskCommand`] to the dispatcher. It performs no I/O, so every
//! routing rule can be tested without a handler in sight.

use super::command::TaskCommand;
use super::dialogue::DialogueState;
use super::extractor::extractor_for;
use super::replies;
use super::task::{ActiveTask, Slot, SlotValue};
use super::triggers::{normalize, recognize, TriggerKind};

/// What the assistant does with a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Reply with this text; nothing is executed.
    Reply(String),
    /// Execute the command; its result becomes the reply.
    Dispatch(TaskCommand),
}

/// The outcome of a turn together with the state for the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub outcome: Outcome,
    pub state: DialogueState,
}

impl Transition {
    fn reply(text: impl Into<String>, state: DialogueState) -> Self {
        Self {
            outcome: Outcome::Reply(text.into()),
            state,
        }
    }

    fn dispatch(command: TaskCommand) -> Self {
        Self {
            outcome: Outcome::Dispatch(command),
            state: DialogueState::idle(),
        }
    }
}

/// Decides how to answer `utterance` given the conversation's `state`.
///
/// An active task always consumes the utterance as its next slot value.
/// Otherwise trigger phrases are matched in table order.
pub fn decide(utterance: &str, state: &DialogueState) -> Transition {
    let transition = if state.is_idle() {
        recognize_new_task(utterance)
    } else {
        continue_task(utterance, state)
    };

    tracing::debug!(
        from = %state.active_task(),
        to = %transition.state.active_task(),
        dispatch = matches!(transition.outcome, Outcome::Dispatch(_)),
        "routed utterance"
    );
    transition
}

fn continue_task(utterance: &str, state: &DialogueState) -> Transition {
    let mut next = state.clone();
    next.fill_next(utterance.trim());

    if let Some(command) = TaskCommand::from_completed(&next) {
        return Transition::dispatch(command);
    }

    match next.next_missing_slot() {
        Some(slot) => {
            let question = replies::question_for(next.active_task(), slot);
            Transition::reply(question, next)
        }
        // A task with no missing slot always builds a command.
        None => Transition::reply(replies::FALLBACK, DialogueState::idle()),
    }
}

fn recognize_new_task(utterance: &str) -> Transition {
    let normalized = normalize(utterance);
    let Some(kind) = recognize(&normalized) else {
        return Transition::reply(replies::FALLBACK, DialogueState::idle());
    };

    let argument = extractor_for(kind)
        .map(|extractor| extractor.extract(utterance))
        .unwrap_or_default();
    let has_argument = !argument.is_empty();

    match kind {
        TriggerKind::Shopping if has_argument => {
            Transition::dispatch(TaskCommand::AddToCart { item: argument })
        }
        TriggerKind::Shopping => start(ActiveTask::Shopping, Vec::new()),
        TriggerKind::Email => start(ActiveTask::Email, Vec::new()),
        TriggerKind::Doubt => start(ActiveTask::CodeDoubt, Vec::new()),
        TriggerKind::Greeting => Transition::reply(replies::GREETING, DialogueState::idle()),
        TriggerKind::AppLaunch if has_argument => {
            Transition::dispatch(TaskCommand::OpenApplication { name: argument })
        }
        TriggerKind::AppLaunch => Transition::reply(replies::ASK_APP, DialogueState::idle()),
        TriggerKind::Youtube if has_argument => {
            Transition::dispatch(TaskCommand::SearchYoutube { query: argument })
        }
        TriggerKind::Youtube => Transition::reply(replies::ASK_VIDEO, DialogueState::idle()),
        TriggerKind::Website if has_argument => {
            Transition::dispatch(TaskCommand::OpenWebsite { target: argument })
        }
        TriggerKind::Website => Transition::reply(replies::ASK_WEBSITE, DialogueState::idle()),
        TriggerKind::FileSearch if has_argument => {
            Transition::dispatch(TaskCommand::SearchFiles { fragment: argument })
        }
        TriggerKind::FileSearch => Transition::reply(replies::ASK_FILE, DialogueState::idle()),
        TriggerKind::Call => {
            let is_video = normalized.contains("video");
            if has_argument {
                Transition::dispatch(TaskCommand::StartCall {
                    contact: argument,
                    is_video,
                })
            } else {
                start(
                    ActiveTask::WhatsappCall,
                    vec![(Slot::IsVideo, SlotValue::from(is_video))],
                )
            }
        }
        TriggerKind::Message if has_argument => {
            let question = replies::ask_message_for(&argument);
            match enter(
                ActiveTask::WhatsappMessage,
                vec![(Slot::Contact, SlotValue::from(argument))],
            ) {
                Ok(state) => Transition::reply(question, state),
                Err(fallback) => fallback,
            }
        }
        TriggerKind::Message => start(ActiveTask::WhatsappMessage, Vec::new()),
    }
}

/// Enters a multi-turn task; a rejected start is logged and answered with the fallback.
fn enter(task: ActiveTask, prefilled: Vec<(Slot, SlotValue)>) -> Result<DialogueState, Transition> {
    DialogueState::begin(task, prefilled).map_err(|e| {
        tracing::error!(error = %e, task = %task, "Could not start task");
        Transition::reply(replies::FALLBACK, DialogueState::idle())
    })
}

/// Enters a multi-turn task and asks for its first missing slot.
fn start(task: ActiveTask, prefilled: Vec<(Slot, SlotValue)>) -> Transition {
    let state = match enter(task, prefilled) {
        Ok(state) => state,
        Err(fallback) => return fallback,
    };
    match state.next_missing_slot() {
        Some(slot) => Transition::reply(replies::question_for(task, slot), state),
        None => Transition::reply(replies::FALLBACK, DialogueState::idle()),
    }
}
