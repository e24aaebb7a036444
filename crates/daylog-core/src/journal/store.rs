//! Persistent entry storage keyed by calendar day.
//!
//! [`EntryStore`] owns the persisted entry set: one JSON payload per
//! [`DateKey`], written under the `entry:` namespace of a [`KvBackend`] so
//! unrelated data sharing the medium never leaks into enumeration.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::journal::{DateKey, Entry};
use crate::storage::{KvBackend, SqliteBackend};

/// Namespace prefix for entry records in the shared kv medium.
const KEY_NAMESPACE: &str = "entry:";

/// Store for daily journal entries.
///
/// All mutation of the entry set goes through this type. `upsert` persists
/// immediately; there is no buffering, so read-after-write holds within a
/// process.
pub struct EntryStore<B: KvBackend> {
    backend: B,
}

impl EntryStore<SqliteBackend> {
    /// Open the store over the default SQLite database,
    /// `<data_dir>/journal.db`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(SqliteBackend::open_default()?))
    }
}

impl<B: KvBackend> EntryStore<B> {
    /// Wrap a storage backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Write or overwrite the entry for `key`.
    ///
    /// Replaces any previous entry for the same day wholesale.
    ///
    /// # Errors
    /// Returns [`StoreError::StorageUnavailable`] if the medium cannot be
    /// written.
    pub fn upsert(&self, key: &DateKey, entry: &Entry) -> Result<(), StoreError> {
        let payload = serde_json::to_string(entry)
            .map_err(|e| StoreError::StorageUnavailable(format!("serialize entry: {e}")))?;
        self.backend.set(&Self::storage_key(key), &payload)?;
        debug!(%key, "entry upserted");
        Ok(())
    }

    /// Read the entry for `key`, or `None` if the day has no entry.
    ///
    /// # Errors
    /// Returns [`StoreError::CorruptEntry`] if a payload exists but cannot
    /// be decoded. This is recoverable; callers treat the day as
    /// absent-with-warning.
    pub fn get(&self, key: &DateKey) -> Result<Option<Entry>, StoreError> {
        match self.backend.get(&Self::storage_key(key))? {
            Some(raw) => Self::decode_entry(key, &raw).map(Some),
            None => Ok(None),
        }
    }

    /// Enumerate every day that currently holds a record in this store's
    /// namespace.
    ///
    /// Foreign keys in the shared medium are excluded; namespaced keys whose
    /// date part is malformed are skipped with a warning rather than
    /// aborting the enumeration. No ordering guarantee beyond the returned
    /// set's own.
    ///
    /// # Errors
    /// Returns an error if the medium cannot be read.
    pub fn all_keys(&self) -> Result<BTreeSet<DateKey>, StoreError> {
        let mut keys = BTreeSet::new();
        for raw in self.backend.keys()? {
            let Some(date_part) = raw.strip_prefix(KEY_NAMESPACE) else {
                continue;
            };
            match DateKey::decode(date_part) {
                Ok(key) => {
                    keys.insert(key);
                }
                Err(e) => warn!(key = %raw, error = %e, "skipping malformed entry key"),
            }
        }
        debug!(count = keys.len(), "enumerated entry keys");
        Ok(keys)
    }

    /// Enumerate and decode every stored entry in one pass.
    ///
    /// Unreadable payloads are reported as `None` so projections can render
    /// an explicit placeholder for that day while the rest of the history
    /// stays intact.
    ///
    /// # Errors
    /// Returns an error only if the medium itself cannot be read.
    pub fn load_all(&self) -> Result<Vec<(DateKey, Option<Entry>)>, StoreError> {
        let mut entries = Vec::new();
        for key in self.all_keys()? {
            match self.get(&key) {
                Ok(entry) => entries.push((key, entry)),
                Err(StoreError::CorruptEntry { .. }) => {
                    warn!(%key, "entry payload is unreadable");
                    entries.push((key, None));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(entries)
    }

    fn storage_key(key: &DateKey) -> String {
        format!("{KEY_NAMESPACE}{key}")
    }

    fn decode_entry(key: &DateKey, raw: &str) -> Result<Entry, StoreError> {
        let entry: Entry = serde_json::from_str(raw).map_err(|_| StoreError::CorruptEntry {
            key: key.to_string(),
        })?;
        if !entry.is_supported_version() {
            return Err(StoreError::CorruptEntry {
                key: key.to_string(),
            });
        }
        Ok(entry)
    }
}
