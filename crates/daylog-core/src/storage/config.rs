//! TOML-based application configuration.
//!
//! Stores the journal's question set and display preferences:
//! - Question labels asked at save time
//! - Which answer headlines the history excerpt
//! - The label the free-text note is merged under
//! - Streak anchoring policy
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::stats::StreakPolicy;

/// Journal question configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Question labels gathered for each day's entry.
    #[serde(default = "default_questions")]
    pub questions: Vec<String>,
    /// Answer preferred for the history excerpt.
    #[serde(default = "default_headline_question")]
    pub headline_question: String,
    /// Label the free-text note is recorded under.
    #[serde(default = "default_note_question")]
    pub note_question: String,
}

/// Streak computation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreakSettings {
    /// What anchors the streak when today has no entry yet.
    #[serde(default)]
    pub policy: StreakPolicy,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub streak: StreakSettings,
}

// Default functions
fn default_questions() -> Vec<String> {
    vec![
        "mood".to_string(),
        "energy".to_string(),
        "progress".to_string(),
    ]
}
fn default_headline_question() -> String {
    "mood".to_string()
}
fn default_note_question() -> String {
    "note_to_tomorrow".to_string()
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            headline_question: default_headline_question(),
            note_question: default_note_question(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| {
                                    invalid(format!("cannot parse '{value}' as number"))
                                })?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("<data_dir>"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing the default file if none exists.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.journal.headline_question, "mood");
        assert_eq!(parsed.journal.questions.len(), 3);
        assert_eq!(parsed.streak.policy, StreakPolicy::MustLogToday);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[journal]\nheadline_question = \"focus\"\n").unwrap();
        assert_eq!(parsed.journal.headline_question, "focus");
        assert_eq!(parsed.journal.note_question, "note_to_tomorrow");
        assert_eq!(parsed.streak.policy, StreakPolicy::MustLogToday);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("journal.headline_question").as_deref(), Some("mood"));
        assert_eq!(cfg.get("streak.policy").as_deref(), Some("must_log_today"));
        assert!(cfg.get("journal.missing_key").is_none());
    }

    #[test]
    fn set_json_value_by_path_updates_string() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "journal.headline_question", "focus").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "journal.headline_question").unwrap(),
            &serde_json::Value::String("focus".to_string())
        );
    }

    #[test]
    fn set_json_value_by_path_updates_array() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "journal.questions", r#"["mood","wins"]"#)
            .unwrap();
        let questions = Config::get_json_value_by_path(&json, "journal.questions").unwrap();
        assert_eq!(questions.as_array().unwrap().len(), 2);
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "journal.nonexistent", "x");
        assert!(matches!(result, Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn streak_policy_parses_from_config_string() {
        let parsed: Config =
            toml::from_str("[streak]\npolicy = \"grace_through_yesterday\"\n").unwrap();
        assert_eq!(parsed.streak.policy, StreakPolicy::GraceThroughYesterday);
    }
}
