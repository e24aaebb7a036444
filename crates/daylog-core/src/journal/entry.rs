//! Journal entry payloads and serialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Schema version written into every stored entry.
///
/// Increment this when the payload layout changes; readers reject payloads
/// from a newer version instead of misreading them.
pub const ENTRY_SCHEMA_VERSION: u32 = 1;

/// The answers recorded for a single day.
///
/// One `Entry` exists per calendar day; a later save for the same day
/// replaces the previous one wholesale. Answers are keyed by question label
/// and kept in a `BTreeMap` so the serialized form is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    /// Payload schema version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Question label -> answer text.
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}

fn default_version() -> u32 {
    ENTRY_SCHEMA_VERSION
}

impl Entry {
    /// Create an empty entry at the current schema version.
    pub fn new() -> Self {
        Self {
            version: ENTRY_SCHEMA_VERSION,
            answers: BTreeMap::new(),
        }
    }

    /// Build an entry from gathered answers.
    pub fn from_answers(answers: BTreeMap<String, String>) -> Self {
        Self {
            version: ENTRY_SCHEMA_VERSION,
            answers,
        }
    }

    /// Add an answer, replacing any previous answer to the same question.
    pub fn with_answer(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.insert(question.into(), answer.into());
        self
    }

    /// Record an answer in place.
    pub fn insert(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.answers.insert(question.into(), answer.into());
    }

    /// Look up the answer to a question, if any.
    pub fn answer(&self, question: &str) -> Option<&str> {
        self.answers.get(question).map(String::as_str)
    }

    /// True when no answers are recorded.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Whether this library understands the payload's schema version.
    pub fn is_supported_version(&self) -> bool {
        self.version <= ENTRY_SCHEMA_VERSION
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}
