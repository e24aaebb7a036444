//! Derived views over the entry set: streak and history.
//!
//! Both are pure projections, recomputed on demand and never persisted.

mod history;
mod streak;

pub use history::{HistoryItem, HistoryProjector, HistorySummary, UNREADABLE_PLACEHOLDER};
pub use streak::{StreakCalculator, StreakConfig, StreakPolicy};
