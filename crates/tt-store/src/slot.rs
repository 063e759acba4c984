//! Durable key/value slots.
//!
//! A slot holds one JSON document under a string key. Reading a key that was
//! never written yields `None`, which callers treat as "no data".

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// String-keyed durable storage.
pub trait KeyValueSlot {
    /// Read the value under `key`. `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// [`StoreError::StorageUnavailable`] when the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// [`StoreError::StorageUnavailable`] when the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Slots stored as `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file that is then renamed over the target, so
/// a failed write never leaves a truncated slot behind.
#[derive(Debug, Clone)]
pub struct FileSlots {
    dir: PathBuf,
}

impl FileSlots {
    /// Create the slot directory if needed.
    ///
    /// # Errors
    ///
    /// [`StoreError::StorageUnavailable`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            StoreError::StorageUnavailable(format!("cannot create {}: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::StorageUnavailable(format!(
                "invalid slot key '{key}'"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueSlot for FileSlots {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(key, bytes = text.len(), "slot read");
                Ok(Some(text))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(key, "slot absent");
                Ok(None)
            }
            Err(e) => Err(StoreError::StorageUnavailable(format!(
                "cannot read {}: {e}",
                path.display()
            ))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        std::fs::write(&tmp, value)
            .and_then(|()| std::fs::rename(&tmp, &path))
            .map_err(|e| {
                let _ = std::fs::remove_file(&tmp);
                StoreError::StorageUnavailable(format!("cannot write {}: {e}", path.display()))
            })?;
        tracing::debug!(key, bytes = value.len(), "slot written");
        Ok(())
    }
}

/// In-memory slots for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySlots {
    values: RefCell<HashMap<String, String>>,
}

impl MemorySlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with `value`.
    #[must_use]
    pub fn with(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueSlot for MemorySlots {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueSlot + ?Sized> KeyValueSlot for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slots = FileSlots::open(dir.path()).unwrap();
        assert_eq!(slots.read("technologies").unwrap(), None);
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let slots = FileSlots::open(dir.path()).unwrap();
        slots.write("techTrackerData", "[1,2]").unwrap();
        assert_eq!(slots.read("techTrackerData").unwrap().as_deref(), Some("[1,2]"));
        assert!(dir.path().join("techTrackerData.json").exists());
        assert!(!dir.path().join(".techTrackerData.json.tmp").exists());
    }

    #[test]
    fn overwrite_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let slots = FileSlots::open(dir.path()).unwrap();
        slots.write("studyPlans", "[]").unwrap();
        slots.write("studyPlans", "[{}]").unwrap();
        assert_eq!(slots.read("studyPlans").unwrap().as_deref(), Some("[{}]"));
    }

    #[test]
    fn path_like_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let slots = FileSlots::open(dir.path()).unwrap();
        assert!(matches!(
            slots.write("../escape", "x"),
            Err(StoreError::StorageUnavailable(_))
        ));
    }

    #[test]
    fn unreadable_dir_is_storage_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();
        assert!(matches!(
            FileSlots::open(&file),
            Err(StoreError::StorageUnavailable(_))
        ));
    }

    #[test]
    fn memory_slots_round_trip() {
        let slots = MemorySlots::new().with("technologies", "[]");
        assert_eq!(slots.read("technologies").unwrap().as_deref(), Some("[]"));
        assert_eq!(slots.read("other").unwrap(), None);
        slots.write("other", "1").unwrap();
        assert_eq!(slots.read("other").unwrap().as_deref(), Some("1"));
    }
}
