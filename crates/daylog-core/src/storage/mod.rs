mod backend;
mod config;

pub use backend::{KvBackend, MemoryBackend, SqliteBackend};
pub use config::{Config, JournalConfig, StreakSettings};

use std::path::PathBuf;

/// Returns the data directory, `~/.config/daylog[-dev]/`.
///
/// Set `DAYLOG_ENV=dev` to use the development data directory, or
/// `DAYLOG_DATA_DIR` to point at an explicit directory (tests, scripting).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = if let Ok(explicit) = std::env::var("DAYLOG_DATA_DIR") {
        PathBuf::from(explicit)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("DAYLOG_ENV").unwrap_or_else(|_| "production".to_string());

        if env == "dev" {
            base_dir.join("daylog-dev")
        } else {
            base_dir.join("daylog")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
