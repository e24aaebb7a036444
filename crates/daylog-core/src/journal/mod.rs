//! Daily journal entries: date keys, payloads, and the persistent store.

mod date_key;
mod entry;
mod store;

pub use date_key::DateKey;
pub use entry::{Entry, ENTRY_SCHEMA_VERSION};
pub use store::EntryStore;
