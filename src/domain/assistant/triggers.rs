//! Trigger phrase table.
//!
//! Rules are checked top to bottom against the lower-cased, trimmed
//! utterance and the first match wins. Several phrases overlap ("call"
//! inside a WhatsApp request, "open" inside "open settings"), so the order
//! of [`TRIGGER_RULES`] is part of the behaviour.

/// Which kind of request a trigger phrase starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Shopping,
    Email,
    Doubt,
    Greeting,
    AppLaunch,
    Youtube,
    Website,
    FileSearch,
    Call,
    Message,
}

/// How a rule inspects the normalized utterance.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Contains at least one phrase.
    ContainsAny(&'static [&'static str]),
    /// Starts with at least one phrase.
    StartsWithAny(&'static [&'static str]),
    /// Contains at least one of `any` and none of `none`.
    ContainsAnyExcept {
        any: &'static [&'static str],
        none: &'static [&'static str],
    },
}

impl Matcher {
    /// Tests an already normalized utterance.
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Matcher::ContainsAny(phrases) => phrases.iter().any(|p| normalized.contains(p)),
            Matcher::StartsWithAny(phrases) => phrases.iter().any(|p| normalized.starts_with(p)),
            Matcher::ContainsAnyExcept { any, none } => {
                any.iter().any(|p| normalized.contains(p))
                    && !none.iter().any(|p| normalized.contains(p))
            }
        }
    }
}

/// One row of the priority table.
#[derive(Debug, Clone, Copy)]
pub struct TriggerRule {
    pub kind: TriggerKind,
    pub matcher: Matcher,
}

/// Trigger rules in priority order.
pub const TRIGGER_RULES: &[TriggerRule] = &[
    TriggerRule {
        kind: TriggerKind::Shopping,
        matcher: Matcher::ContainsAny(&["shop", "buy", "add to cart"]),
    },
    TriggerRule {
        kind: TriggerKind::Email,
        matcher: Matcher::ContainsAny(&["mail", "email"]),
    },
    TriggerRule {
        kind: TriggerKind::Doubt,
        matcher: Matcher::ContainsAny(&["doubt", "help", "question"]),
    },
    TriggerRule {
        kind: TriggerKind::Greeting,
        matcher: Matcher::ContainsAny(&["hi", "hello", "hey"]),
    },
    TriggerRule {
        kind: TriggerKind::AppLaunch,
        matcher: Matcher::ContainsAny(&["open app", "launch", "open settings", "open vscode"]),
    },
    TriggerRule {
        kind: TriggerKind::Youtube,
        matcher: Matcher::ContainsAny(&["youtube"]),
    },
    TriggerRule {
        kind: TriggerKind::Website,
        matcher: Matcher::ContainsAny(&["website", "browse", "go to"]),
    },
    TriggerRule {
        kind: TriggerKind::FileSearch,
        matcher: Matcher::ContainsAny(&["search file", "find file", "look for"]),
    },
    TriggerRule {
        kind: TriggerKind::Call,
        matcher: Matcher::StartsWithAny(&["call", "video call"]),
    },
    TriggerRule {
        kind: TriggerKind::Message,
        matcher: Matcher::ContainsAnyExcept {
            any: &["message", "whatsapp"],
            none: &["call"],
        },
    },
];

/// Lower-cases and trims an utterance for matching.
pub fn normalize(utterance: &str) -> String {
    utterance.trim().to_lowercase()
}

/// Finds the first rule that matches an already normalized utterance.
pub fn recognize(normalized: &str) -> Option<TriggerKind> {
    TRIGGER_RULES
        .iter()
        .find(|rule| rule.matcher.matches(normalized))
        .map(|rule| rule.kind)
}
