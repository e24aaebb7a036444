//! Reverse-chronological history projection.
//!
//! Turns the stored entry set into a rendering-ready summary: one line per
//! day, most recent first. The projection never fails on a bad day; an
//! unreadable payload becomes an explicit placeholder and the rest of the
//! history stays intact.

use serde::{Deserialize, Serialize};

use crate::journal::{DateKey, Entry};

/// Excerpt shown for a day whose stored payload could not be decoded.
pub const UNREADABLE_PLACEHOLDER: &str = "(unreadable entry)";

/// One rendered history line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// The day this line summarizes.
    pub key: DateKey,

    /// Display excerpt for the day.
    pub excerpt: String,
}

/// Ordered, rendering-ready history: most recent day first.
///
/// Always renderable uniformly; callers check only [`is_empty`](Self::is_empty)
/// for the empty state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Items in descending date order.
    pub items: Vec<HistoryItem>,
}

impl HistorySummary {
    /// True when no days have entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of summarized days.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Projector from stored entries to a [`HistorySummary`].
pub struct HistoryProjector {
    headline_question: String,
}

impl HistoryProjector {
    /// Create a projector preferring the default headline question.
    pub fn new() -> Self {
        Self::with_headline("mood")
    }

    /// Create a projector preferring `headline_question` for excerpts.
    pub fn with_headline(headline_question: impl Into<String>) -> Self {
        Self {
            headline_question: headline_question.into(),
        }
    }

    /// Build the summary from stored entries.
    ///
    /// `None` payloads (corrupt records, as reported by the store) render
    /// as [`UNREADABLE_PLACEHOLDER`]. Input order does not matter; the
    /// output is sorted descending by day.
    pub fn build(&self, entries: &[(DateKey, Option<Entry>)]) -> HistorySummary {
        let mut items: Vec<HistoryItem> = entries
            .iter()
            .map(|(key, entry)| HistoryItem {
                key: *key,
                excerpt: self.excerpt(entry.as_ref()),
            })
            .collect();
        items.sort_by(|a, b| b.key.cmp(&a.key));
        HistorySummary { items }
    }

    /// Excerpt preference: headline answer, else a compact rendering of all
    /// answers, else the unreadable placeholder.
    fn excerpt(&self, entry: Option<&Entry>) -> String {
        let Some(entry) = entry else {
            return UNREADABLE_PLACEHOLDER.to_string();
        };
        match entry.answer(&self.headline_question) {
            Some(headline) if !headline.is_empty() => headline.to_string(),
            _ => serde_json::to_string(&entry.answers)
                .unwrap_or_else(|_| UNREADABLE_PLACEHOLDER.to_string()),
        }
    }
}

impl Default for HistoryProjector {
    fn default() -> Self {
        Self::new()
    }
}
