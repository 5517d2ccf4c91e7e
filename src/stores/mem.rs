//! `MemStore` — ephemeral in-memory [`DurableStore`].
//!
//! All blobs live in process memory and are discarded when the last handle
//! drops. The store is `Clone` with shared interior state, so a test can
//! keep one handle while the registry owns another and inspect what was
//! written through it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::RegistryError;
use crate::store::DurableStore;

#[derive(Debug, Clone, Default)]
pub struct MemStore {
    files: Arc<Mutex<HashMap<String, String>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of every blob currently stored, in no particular order.
    pub fn filenames(&self) -> Vec<String> {
        self.files
            .lock()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl DurableStore for MemStore {
    fn read(&self, filename: &str) -> Result<String, RegistryError> {
        let files = self
            .files
            .lock()
            .map_err(|_| RegistryError::Storage("mem store lock poisoned".into()))?;
        files
            .get(filename)
            .cloned()
            .ok_or_else(|| RegistryError::Storage(format!("no entry named {filename}")))
    }

    fn write(&self, filename: &str, contents: &str) -> Result<(), RegistryError> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| RegistryError::Storage("mem store lock poisoned".into()))?;
        files.insert(filename.to_string(), contents.to_string());
        Ok(())
    }

    fn exists(&self, filename: &str) -> bool {
        self.files
            .lock()
            .map(|files| files.contains_key(filename))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_roundtrip() {
        let store = MemStore::new();
        assert!(!store.exists("a.json"));
        store.write("a.json", "{}").unwrap();
        assert!(store.exists("a.json"));
        assert_eq!(store.read("a.json").unwrap(), "{}");
    }

    #[test]
    fn write_overwrites() {
        let store = MemStore::new();
        store.write("a.json", "old").unwrap();
        store.write("a.json", "new").unwrap();
        assert_eq!(store.read("a.json").unwrap(), "new");
    }

    #[test]
    fn read_missing_is_storage_error() {
        let err = MemStore::new().read("absent.json").unwrap_err();
        assert!(matches!(err, RegistryError::Storage(_)));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn clones_share_contents() {
        let store = MemStore::new();
        let handle = store.clone();
        store.write("shared.json", "x").unwrap();
        assert_eq!(handle.read("shared.json").unwrap(), "x");
        assert_eq!(handle.filenames(), vec!["shared.json".to_string()]);
    }
}
