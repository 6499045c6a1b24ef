//! Answer history - raw answers collected so far in a session.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from question id to the raw answer supplied by the user.
///
/// Re-answering a question overwrites the prior entry (last write wins).
/// Insertion order carries no meaning; the order of asking is driven by
/// question priority, not by this history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerHistory {
    entries: HashMap<String, String>,
}

impl AnswerHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer for a question, replacing any prior answer.
    pub fn record(&mut self, question_id: impl Into<String>, raw_answer: impl Into<String>) {
        self.entries.insert(question_id.into(), raw_answer.into());
    }

    /// Returns true if the question has already been answered.
    pub fn contains(&self, question_id: &str) -> bool {
        self.entries.contains_key(question_id)
    }

    /// Returns the raw answer for a question, if any.
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.entries.get(question_id).map(String::as_str)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over (question id, raw answer) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
