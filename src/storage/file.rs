use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::{KeyValueStorage, check_quota, validate_key};
use crate::error::StorageResult;

const SLOT_EXTENSION: &str = "json";

/// One file per key under a directory, with an optional byte quota across all
/// keys.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    quota: Option<usize>,
}

impl FileStorage {
    pub fn open(dir: impl Into<PathBuf>, quota: Option<usize>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), ?quota, "file storage opened");
        Ok(Self { dir, quota })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{SLOT_EXTENSION}"))
    }

    fn usage_excluding(&self, key: &str) -> StorageResult<usize> {
        let mut usage = 0;
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SLOT_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if stem == key {
                continue;
            }
            usage += stem.len() + fs::metadata(&path)?.len() as usize;
        }
        Ok(usage)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        if self.quota.is_some() {
            check_quota(self.quota, self.usage_excluding(key)?, key, value)?;
        }

        // Rename is atomic on the same filesystem, so readers never see a torn slot.
        let target = self.path_for(key);
        let staging = self.dir.join(format!("{key}.{SLOT_EXTENSION}.tmp"));
        fs::write(&staging, value)?;
        if let Err(err) = fs::rename(&staging, &target) {
            if let Err(cleanup) = fs::remove_file(&staging) {
                tracing::warn!(path = %staging.display(), error = %cleanup, "staging file left behind");
            }
            return Err(err.into());
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    #[test]
    fn round_trips_and_removes_slots() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path(), None).expect("open");

        assert_eq!(storage.get_item("sfh_cart").expect("read"), None);
        storage.set_item("sfh_cart", "[]").expect("write");
        assert_eq!(storage.get_item("sfh_cart").expect("read").as_deref(), Some("[]"));

        storage.remove_item("sfh_cart").expect("remove");
        storage.remove_item("sfh_cart").expect("second remove is a no-op");
        assert_eq!(storage.get_item("sfh_cart").expect("read"), None);
    }

    #[test]
    fn failed_rename_leaves_no_staging_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path(), None).expect("open");

        // A non-empty directory where the slot file should go makes the rename fail.
        let blocked = dir.path().join("sfh_cart.json");
        fs::create_dir(&blocked).expect("mkdir");
        fs::write(blocked.join("keep"), "x").expect("write");

        let err = storage.set_item("sfh_cart", "[]");
        assert!(matches!(err, Err(StorageError::Io(_))));
        assert!(!dir.path().join("sfh_cart.json.tmp").exists());
    }

    #[test]
    fn quota_counts_other_slots() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path(), Some(32)).expect("open");

        storage.set_item("a", "0123456789").expect("fits");
        storage.set_item("b", "0123456789").expect("fits");
        let err = storage.set_item("c", "0123456789");
        assert!(matches!(err, Err(StorageError::QuotaExceeded { .. })));

        // Rewriting an existing slot only counts its new size.
        storage.set_item("a", "012345678901").expect("fits");
    }
}
