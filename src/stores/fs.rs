//! `FsStore` — filesystem-backed [`DurableStore`].
//!
//! Filenames are passed to `std::fs` as plain paths with no normalization;
//! relative names resolve against the process working directory.

use std::fs;
use std::path::Path;

use crate::error::RegistryError;
use crate::store::DurableStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

impl DurableStore for FsStore {
    fn read(&self, filename: &str) -> Result<String, RegistryError> {
        fs::read_to_string(filename)
            .map_err(|e| RegistryError::Storage(format!("cannot read {filename}: {e}")))
    }

    fn write(&self, filename: &str, contents: &str) -> Result<(), RegistryError> {
        fs::write(filename, contents)
            .map_err(|e| RegistryError::Storage(format!("cannot write {filename}: {e}")))
    }

    fn exists(&self, filename: &str) -> bool {
        Path::new(filename).exists()
    }
}
