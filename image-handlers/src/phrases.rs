//! Canned replies for the two text outcomes: missing search term and nothing found.

use rand::seq::SliceRandom;

pub trait Phrases: Send + Sync {
    /// Reply for a command sent without a search term.
    fn surprise(&self) -> String;
    /// Reply when no provider produced a sendable image.
    fn no(&self) -> String;
}

const SURPRISE: &[&str] = &[
    "Surprise me!",
    "And what exactly should I look for?",
    "Give me something to search for.",
    "Pictures of nothing coming right up... or not.",
];

const NO: &[&str] = &[
    "Nothing found.",
    "No pictures for that, sorry.",
    "I looked everywhere. Nothing.",
    "Nope.",
];

/// Picks a random phrase from each list.
#[derive(Debug, Clone)]
pub struct RandomPhrases {
    surprise: Vec<String>,
    no: Vec<String>,
}

impl RandomPhrases {
    /// Custom phrase lists; an empty list falls back to the built-in one.
    pub fn new(surprise: Vec<String>, no: Vec<String>) -> Self {
        Self {
            surprise: or_builtin(surprise, SURPRISE),
            no: or_builtin(no, NO),
        }
    }
}

impl Default for RandomPhrases {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

fn or_builtin(list: Vec<String>, builtin: &[&str]) -> Vec<String> {
    if list.is_empty() {
        builtin.iter().map(|s| s.to_string()).collect()
    } else {
        list
    }
}

fn pick(list: &[String]) -> String {
    list.choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_default()
}

impl Phrases for RandomPhrases {
    fn surprise(&self) -> String {
        pick(&self.surprise)
    }

    fn no(&self) -> String {
        pick(&self.no)
    }
}
