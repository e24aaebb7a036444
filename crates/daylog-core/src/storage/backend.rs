//! Key-value storage backends.
//!
//! The entry store is written against [`KvBackend`] so the durable medium is
//! an explicit dependency: SQLite in the application, an in-memory map in
//! tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use crate::error::StoreError;

/// A flat string key-value medium.
///
/// The medium may be shared with unrelated data; callers own their own
/// namespace discipline on top of it.
pub trait KvBackend {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// The write is durable once this returns: a subsequent `get` in the
    /// same process observes it.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Enumerate every key currently present in the medium, in no
    /// guaranteed order.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// SQLite-backed key-value storage.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open (and create if missing) the database at `path`.
    ///
    /// # Errors
    /// Returns [`StoreError::OpenFailed`] if the database cannot be opened
    /// or its schema cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path).map_err(|source| StoreError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let backend = Self { conn };
        backend
            .migrate()
            .map_err(|source| StoreError::OpenFailed { path, source })?;
        Ok(backend)
    }

    /// Open the database at the default location, `<data_dir>/journal.db`.
    ///
    /// # Errors
    /// Returns an error if the data directory or database is unavailable.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = super::data_dir()
            .map_err(|e| StoreError::StorageUnavailable(format!("data directory: {e}")))?;
        Self::open(dir.join("journal.db"))
    }

    /// Open an in-memory database (tests and ephemeral use).
    ///
    /// # Errors
    /// Returns [`StoreError::OpenFailed`] if SQLite cannot allocate the
    /// in-memory database.
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::OpenFailed {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        let backend = Self { conn };
        backend.migrate().map_err(|source| StoreError::OpenFailed {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        Ok(backend)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }
}

impl KvBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut keys = Vec::new();
        for row in rows {
            keys.push(row?);
        }
        Ok(keys)
    }
}

/// In-memory key-value storage.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    map: RefCell<BTreeMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.map.borrow().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_set_then_get() {
        let backend = SqliteBackend::open_memory().unwrap();
        assert!(backend.get("missing").unwrap().is_none());
        backend.set("a", "1").unwrap();
        assert_eq!(backend.get("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn sqlite_set_replaces() {
        let backend = SqliteBackend::open_memory().unwrap();
        backend.set("a", "1").unwrap();
        backend.set("a", "2").unwrap();
        assert_eq!(backend.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(backend.keys().unwrap().len(), 1);
    }

    #[test]
    fn sqlite_keys_lists_everything() {
        let backend = SqliteBackend::open_memory().unwrap();
        backend.set("b", "2").unwrap();
        backend.set("a", "1").unwrap();
        let mut keys = backend.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn memory_backend_matches_sqlite_semantics() {
        let backend = MemoryBackend::new();
        assert!(backend.get("a").unwrap().is_none());
        backend.set("a", "1").unwrap();
        backend.set("a", "2").unwrap();
        assert_eq!(backend.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(backend.keys().unwrap(), vec!["a"]);
    }

    #[test]
    fn sqlite_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.db");
        {
            let backend = SqliteBackend::open(&path).unwrap();
            backend.set("a", "1").unwrap();
        }
        let backend = SqliteBackend::open(&path).unwrap();
        assert_eq!(backend.get("a").unwrap().as_deref(), Some("1"));
    }
}
