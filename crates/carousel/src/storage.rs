//! Key-value storage port.
//!
//! The original runtime persisted through browser local storage; the
//! engine only ever needs two operations, so the port stays that narrow.
//! Write failures are an implementation concern: persistent stores log
//! and continue, matching the best-effort semantics of local storage.
//!
//! [`MemoryStore`] backs tests and embedders that do not want
//! persistence at all.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CarouselError;

/// Storage key for the cached product sequence.
pub const PRODUCT_CACHE_KEY: &str = "productCarouselData";

/// Storage key for the persisted favorite ids.
pub const FAVORITES_KEY: &str = "favorites";

/// Narrow key-value storage port.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw string stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

/// In-memory store backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        // A poisoned lock is treated as an empty store
        match self.entries.lock() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }
}

// =============================================================================
// JSON Helpers
// =============================================================================

/// Read and parse the JSON value stored under `key`.
///
/// Returns `Ok(None)` when the key is absent.
///
/// # Errors
///
/// Returns [`CarouselError::CorruptCache`] when a value exists but does
/// not parse. Callers decide whether to fail closed (treat as absent)
/// or propagate.
pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &'static str,
) -> Result<Option<T>, CarouselError> {
    let Some(raw) = store.get(key) else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| CarouselError::CorruptCache { key, source })
}

/// Serialize `value` and store it under `key`.
///
/// Serialization failures are logged and the previous stored value is
/// left in place.
pub fn write_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, &json),
        Err(error) => tracing::error!(%error, key, "failed to serialize value for storage"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());

        store.set("key", "value");
        assert_eq!(store.get("key").as_deref(), Some("value"));

        store.set("key", "replaced");
        assert_eq!(store.get("key").as_deref(), Some("replaced"));
    }

    #[test]
    fn test_read_json_absent_key() {
        let store = MemoryStore::new();
        let value: Option<Vec<String>> = read_json(&store, "absent").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_read_json_corrupt_value() {
        let store = MemoryStore::new();
        store.set(PRODUCT_CACHE_KEY, "{not valid json");

        let result: Result<Option<Vec<String>>, _> = read_json(&store, PRODUCT_CACHE_KEY);
        assert!(matches!(
            result,
            Err(CarouselError::CorruptCache {
                key: PRODUCT_CACHE_KEY,
                ..
            })
        ));
    }

    #[test]
    fn test_write_then_read_json() {
        let store = MemoryStore::new();
        write_json(&store, "list", &vec!["a".to_owned(), "b".to_owned()]);

        let value: Option<Vec<String>> = read_json(&store, "list").unwrap();
        assert_eq!(value.unwrap(), vec!["a", "b"]);
    }
}
