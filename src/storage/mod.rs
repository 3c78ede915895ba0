//! Local key-value persistence.
//!
//! [`KeyValueStorage`] is the raw string store (a directory of files in
//! production, a map in tests). [`PersistentStore`] layers JSON on top and
//! implements the fail-soft read contract: a missing, malformed or unreadable
//! slot yields the caller's fallback instead of an error.

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{StorageError, StorageResult};

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Synchronous string storage keyed by slot name.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

pub struct PersistentStore {
    storage: Box<dyn KeyValueStorage>,
}

impl PersistentStore {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Reads and decodes a slot. `Ok(None)` means the slot is absent or empty.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let Some(raw) = self.storage.get_item(key)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            })
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        self.load_or_else(key, || fallback)
    }

    pub fn load_or_else<T, F>(&self, key: &str, fallback: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                tracing::debug!(slot = key, "slot missing, using fallback");
                fallback()
            }
            Err(err) => {
                tracing::warn!(slot = key, error = %err, "slot unreadable, using fallback");
                fallback()
            }
        }
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.storage.set_item(key, &raw)
    }

    pub fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage.remove_item(key)
    }
}

/// Keys double as file names, so they are restricted to a safe alphabet.
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Checks a write against an optional byte quota. `usage` is what every other
/// key already occupies.
pub(crate) fn check_quota(
    quota: Option<usize>,
    usage: usize,
    key: &str,
    value: &str,
) -> StorageResult<()> {
    let Some(quota) = quota else {
        return Ok(());
    };
    let needed = usage + key.len() + value.len();
    if needed > quota {
        return Err(StorageError::QuotaExceeded {
            key: key.to_string(),
            needed,
            quota,
        });
    }
    Ok(())
}
