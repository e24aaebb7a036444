//! # daylog Core Library
//!
//! This library provides the core business logic for daylog, a personal
//! daily-journal utility. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary that is a thin
//! wrapper over this library.
//!
//! ## Architecture
//!
//! - **Journal**: One entry per local calendar day, keyed by a canonical
//!   `YYYY-MM-DD` date key and persisted through a pluggable key-value
//!   backend (SQLite in the application, in-memory in tests)
//! - **Stats**: Pure projections over the entry set: the consecutive-day
//!   streak and the reverse-chronological history summary
//! - **Storage**: SQLite key-value backend and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`EntryStore`]: Persistent entry set with upsert semantics
//! - [`StreakCalculator`]: Consecutive-day streak over an injected "today"
//! - [`HistoryProjector`]: Rendering-ready history list
//! - [`Config`]: Question set and display preferences

pub mod error;
pub mod journal;
pub mod stats;
pub mod storage;

pub use error::{ConfigError, CoreError, KeyError, StoreError};
pub use journal::{DateKey, Entry, EntryStore, ENTRY_SCHEMA_VERSION};
pub use stats::{
    HistoryItem, HistoryProjector, HistorySummary, StreakCalculator, StreakConfig, StreakPolicy,
    UNREADABLE_PLACEHOLDER,
};
pub use storage::{Config, KvBackend, MemoryBackend, SqliteBackend};
