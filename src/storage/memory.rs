use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use super::{KeyValueStorage, check_quota, validate_key};
use crate::error::{StorageError, StorageResult};

#[derive(Debug, Default)]
struct Inner {
    items: HashMap<String, String>,
    quota: Option<usize>,
    failing: bool,
}

/// In-process storage. Clones share the same map, so two stores opened over
/// clones behave like two browser tabs on one origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        let storage = Self::new();
        storage.settings().quota = Some(quota);
        storage
    }

    /// While set, every access fails with [`StorageError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.settings().failing = failing;
    }

    pub fn contains(&self, key: &str) -> bool {
        self.settings().items.contains_key(key)
    }

    // Test controls go through even after a panic poisoned the lock.
    fn settings(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_inner<T>(&self, f: impl FnOnce(&mut Inner) -> StorageResult<T>) -> StorageResult<T> {
        let mut inner = self.inner.lock().map_err(|_| StorageError::Unavailable)?;
        if inner.failing {
            return Err(StorageError::Unavailable);
        }
        f(&mut inner)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        self.with_inner(|inner| Ok(inner.items.get(key).cloned()))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.with_inner(|inner| {
            let usage = inner
                .items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            check_quota(inner.quota, usage, key, value)?;
            inner.items.insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.with_inner(|inner| {
            inner.items.remove(key);
            Ok(())
        })
    }
}
