//! End-to-end routing scenarios through the public domain API.
//!
//! Each scenario feeds a conversation turn by turn into `decide` and
//! checks the replies, the dispatched command and the final state.

use thambi::domain::assistant::{decide, replies, ActiveTask, DialogueState, Outcome, TaskCommand};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Result of running a whole conversation.
struct Conversation {
    outcomes: Vec<Outcome>,
    state: DialogueState,
}

impl Conversation {
    fn run(utterances: &[&str]) -> Self {
        let mut state = DialogueState::idle();
        let mut outcomes = Vec::new();
        for utterance in utterances {
            let transition = decide(utterance, &state);
            outcomes.push(transition.outcome);
            state = transition.state;
        }
        Self { outcomes, state }
    }

    fn replies(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::Reply(text) => Some(text.as_str()),
                Outcome::Dispatch(_) => None,
            })
            .collect()
    }

    fn dispatched(&self) -> Vec<&TaskCommand> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::Dispatch(command) => Some(command),
                Outcome::Reply(_) => None,
            })
            .collect()
    }
}

// =============================================================================
// Multi-turn tasks
// =============================================================================

#[test]
fn email_collects_three_slots_then_sends() {
    let convo = Conversation::run(&["email", "bob@x.com", "Meeting", "See you at 3"]);

    assert_eq!(
        convo.replies(),
        vec![
            replies::ASK_EMAIL_TO,
            replies::ASK_SUBJECT,
            replies::ASK_MESSAGE
        ]
    );
    assert_eq!(
        convo.dispatched(),
        vec![&TaskCommand::SendEmail {
            to: "bob@x.com".to_string(),
            subject: "Meeting".to_string(),
            body: "See you at 3".to_string(),
        }]
    );
    assert!(convo.state.is_idle());
}

#[test]
fn shopping_mode_takes_next_utterance_verbatim() {
    let convo = Conversation::run(&["shop", "red shoes"]);

    assert_eq!(convo.replies(), vec![replies::ASK_ITEM]);
    assert_eq!(
        convo.dispatched(),
        vec![&TaskCommand::AddToCart {
            item: "red shoes".to_string()
        }]
    );
    assert!(convo.state.is_idle());
}

#[test]
fn active_task_swallows_trigger_words() {
    // "buy" would start shopping when idle; here it is the subject.
    let convo = Conversation::run(&["send an email", "ann@x.com", "buy milk", "please"]);

    assert_eq!(
        convo.dispatched(),
        vec![&TaskCommand::SendEmail {
            to: "ann@x.com".to_string(),
            subject: "buy milk".to_string(),
            body: "please".to_string(),
        }]
    );
}

#[test]
fn whatsapp_message_with_contact_asks_only_for_text() {
    let convo = Conversation::run(&["message to mom", "running late"]);

    assert_eq!(convo.replies(), vec!["💬 What message should I send to mom?"]);
    assert_eq!(
        convo.dispatched(),
        vec![&TaskCommand::SendChatMessage {
            contact: "mom".to_string(),
            message: "running late".to_string(),
        }]
    );
}

#[test]
fn call_without_contact_asks_then_voice_calls() {
    let convo = Conversation::run(&["call", "Raj"]);

    assert_eq!(convo.replies(), vec![replies::ASK_CALL_CONTACT]);
    assert_eq!(
        convo.dispatched(),
        vec![&TaskCommand::StartCall {
            contact: "Raj".to_string(),
            is_video: false,
        }]
    );
}

#[test]
fn video_call_without_contact_keeps_video_flag() {
    let convo = Conversation::run(&["video call", "Raj"]);

    assert_eq!(convo.replies(), vec![replies::ASK_CALL_CONTACT]);
    assert_eq!(
        convo.dispatched(),
        vec![&TaskCommand::StartCall {
            contact: "Raj".to_string(),
            is_video: true,
        }]
    );
}

#[test]
fn doubt_forwards_the_question() {
    let convo = Conversation::run(&["I have a doubt", "What is a lifetime?"]);

    assert_eq!(convo.replies(), vec![replies::ASK_QUESTION]);
    assert_eq!(
        convo.dispatched(),
        vec![&TaskCommand::AnswerQuestion {
            question: "What is a lifetime?".to_string()
        }]
    );
}

// =============================================================================
// Single-turn commands
// =============================================================================

#[test]
fn direct_commands_dispatch_immediately() {
    let cases = [
        (
            "buy laptop",
            TaskCommand::AddToCart {
                item: "laptop".to_string(),
            },
        ),
        (
            "video call to Raj",
            TaskCommand::StartCall {
                contact: "Raj".to_string(),
                is_video: true,
            },
        ),
        (
            "launch Notepad",
            TaskCommand::OpenApplication {
                name: "Notepad".to_string(),
            },
        ),
        (
            "search youtube for lofi beats",
            TaskCommand::SearchYoutube {
                query: "lofi beats".to_string(),
            },
        ),
        (
            "go to example.com",
            TaskCommand::OpenWebsite {
                target: "example.com".to_string(),
            },
        ),
        (
            "look for Tax Report",
            TaskCommand::SearchFiles {
                fragment: "Tax Report".to_string(),
            },
        ),
    ];

    for (utterance, expected) in cases {
        let convo = Conversation::run(&[utterance]);
        assert_eq!(convo.dispatched(), vec![&expected], "utterance: {}", utterance);
        assert!(convo.state.is_idle());
    }
}

#[test]
fn missing_single_turn_arguments_ask_without_state() {
    for (utterance, question) in [
        ("open app", replies::ASK_APP),
        ("youtube", replies::ASK_VIDEO),
        ("browse", replies::ASK_WEBSITE),
        ("find file", replies::ASK_FILE),
    ] {
        let convo = Conversation::run(&[utterance]);
        assert_eq!(convo.replies(), vec![question]);
        assert!(convo.state.is_idle());
    }
}

// =============================================================================
// Priority and fallback
// =============================================================================

#[test]
fn doubt_outranks_greeting() {
    let convo = Conversation::run(&["hi, can you help"]);
    assert_eq!(convo.replies(), vec![replies::ASK_QUESTION]);
    assert_eq!(convo.state.active_task(), ActiveTask::CodeDoubt);

    let convo = Conversation::run(&["hello there"]);
    assert_eq!(convo.replies(), vec![replies::GREETING]);
    assert!(convo.state.is_idle());
}

#[test]
fn unknown_input_falls_back_and_stays_idle() {
    let convo = Conversation::run(&["what's the weather", "12345"]);
    assert_eq!(convo.replies(), vec![replies::FALLBACK, replies::FALLBACK]);
    assert!(convo.dispatched().is_empty());
    assert!(convo.state.is_idle());
}
