//! DurableStore trait — the text-by-filename persistence boundary.
//!
//! The registry never touches the filesystem directly; it moves whole text
//! blobs through this trait. [`FsStore`](crate::stores::fs::FsStore) is the
//! production implementation; [`MemStore`](crate::stores::mem::MemStore)
//! backs tests and embedded use.

use crate::error::RegistryError;

/// Pluggable text-blob store keyed by filename.
///
/// Implementations operate on the filename as an opaque key (for `FsStore`,
/// a plain path handed to the OS with no normalization) via blocking I/O.
pub trait DurableStore: Send + Sync {
    /// Read the full contents stored under `filename`.
    fn read(&self, filename: &str) -> Result<String, RegistryError>;

    /// Write `contents` under `filename`, overwriting any existing entry.
    fn write(&self, filename: &str, contents: &str) -> Result<(), RegistryError>;

    /// Whether anything is stored under `filename`.
    fn exists(&self, filename: &str) -> bool;
}
