//! Declarative argument extraction.
//!
//! Once a trigger rule has matched, its extractor removes the trigger
//! phrases and filler words from the original utterance. Whatever is left
//! is the argument (an item, an app name, a contact...). Matching is done
//! per whitespace token and ignores case and surrounding punctuation, so
//! the kept words keep their original spelling.

use super::triggers::TriggerKind;

const EDGE_PUNCTUATION: &[char] = &[',', '.', '!', '?', ';', ':'];

/// Phrases and filler words stripped for one trigger kind.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentExtractor {
    /// Keep only the words after the last token containing this marker.
    pub after_last: Option<&'static str>,
    /// Phrases removed wherever they occur as whole words.
    pub phrases: &'static [&'static str],
    /// Single filler words removed wherever they occur.
    pub fillers: &'static [&'static str],
}

impl ArgumentExtractor {
    /// Extracts the argument; an empty string means nothing usable was said.
    pub fn extract(&self, utterance: &str) -> String {
        let mut tokens: Vec<&str> = utterance.split_whitespace().collect();

        if let Some(marker) = self.after_last {
            if let Some(pos) = tokens.iter().rposition(|t| t.to_lowercase().contains(marker)) {
                tokens.drain(..=pos);
            }
        }

        let keys: Vec<String> = tokens.iter().map(|t| token_key(t)).collect();
        let phrases: Vec<Vec<&str>> = self
            .phrases
            .iter()
            .map(|p| p.split_whitespace().collect())
            .collect();

        let mut kept = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            if let Some(len) = phrases
                .iter()
                .find(|phrase| starts_with_phrase(&keys[i..], phrase))
                .map(|phrase| phrase.len())
            {
                i += len;
                continue;
            }
            if !self.fillers.contains(&keys[i].as_str()) {
                kept.push(tokens[i]);
            }
            i += 1;
        }

        kept.join(" ")
            .trim_matches(|c: char| EDGE_PUNCTUATION.contains(&c))
            .trim()
            .to_string()
    }
}

fn token_key(token: &str) -> String {
    token.trim_matches(|c: char| EDGE_PUNCTUATION.contains(&c)).to_lowercase()
}

fn starts_with_phrase(keys: &[String], phrase: &[&str]) -> bool {
    !phrase.is_empty()
        && keys.len() >= phrase.len()
        && keys.iter().zip(phrase).all(|(key, word)| key.as_str() == *word)
}

const SHOPPING: ArgumentExtractor = ArgumentExtractor {
    after_last: None,
    phrases: &["add to cart", "buy", "shop"],
    fillers: &[],
};

const APP_LAUNCH: ArgumentExtractor = ArgumentExtractor {
    after_last: None,
    phrases: &["open app", "launch", "open"],
    fillers: &[],
};

const YOUTUBE: ArgumentExtractor = ArgumentExtractor {
    after_last: Some("youtube"),
    phrases: &["search"],
    fillers: &["for"],
};

const WEBSITE: ArgumentExtractor = ArgumentExtractor {
    after_last: None,
    phrases: &["open website", "website", "browse", "go to", "open"],
    fillers: &[],
};

const FILE_SEARCH: ArgumentExtractor = ArgumentExtractor {
    after_last: None,
    phrases: &["search file", "find file", "look for"],
    fillers: &["for"],
};

const CALL: ArgumentExtractor = ArgumentExtractor {
    after_last: None,
    phrases: &["video", "call", "whatsapp"],
    fillers: &["to"],
};

const MESSAGE: ArgumentExtractor = ArgumentExtractor {
    after_last: None,
    phrases: &["message", "whatsapp"],
    fillers: &["to", "send", "a"],
};

/// Extractor for a trigger kind; `None` for kinds that take no argument.
pub fn extractor_for(kind: TriggerKind) -> Option<&'static ArgumentExtractor> {
    match kind {
        TriggerKind::Shopping => Some(&SHOPPING),
        TriggerKind::AppLaunch => Some(&APP_LAUNCH),
        TriggerKind::Youtube => Some(&YOUTUBE),
        TriggerKind::Website => Some(&WEBSITE),
        TriggerKind::FileSearch => Some(&FILE_SEARCH),
        TriggerKind::Call => Some(&CALL),
        TriggerKind::Message => Some(&MESSAGE),
        TriggerKind::Email | TriggerKind::Doubt | TriggerKind::Greeting => None,
    }
}
