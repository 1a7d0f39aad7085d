//! JSON-file-backed key-value store.
//!
//! Stands in for browser local storage on the command line: one flat
//! JSON object per state file, read once on open, rewritten after every
//! `set`. Write failures are logged and the process keeps going - the
//! store is best-effort, like the original.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use showcase_carousel::KeyValueStore;
use thiserror::Error;

/// Errors that can occur opening a state file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// State file exists but could not be read.
    #[error("failed to read state file: {0}")]
    Io(#[from] std::io::Error),

    /// State file exists but is not a JSON object of strings.
    #[error("state file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Key-value store persisted as a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open `path`, loading existing entries if the file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Drop `key` from the store and rewrite the file.
    ///
    /// Returns `true` if the key was present.
    pub fn remove(&self, key: &str) -> bool {
        let Ok(mut entries) = self.entries.lock() else {
            return false;
        };
        let removed = entries.remove(key).is_some();
        if removed {
            self.flush(&entries);
        }
        removed
    }

    fn flush(&self, entries: &HashMap<String, String>) {
        let json = match serde_json::to_string_pretty(entries) {
            Ok(json) => json,
            Err(error) => {
                tracing::error!(%error, "failed to serialize state file");
                return;
            }
        };
        if let Err(error) = std::fs::write(&self.path, json) {
            tracing::error!(%error, path = %self.path.display(), "failed to write state file");
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.entries.lock() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
            self.flush(&entries);
        }
    }
}
