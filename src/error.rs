//! Registry error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("system message with role '{0}' already exists")]
    DuplicateRole(String),

    #[error("filename must have a .json extension: '{0}'")]
    InvalidFilename(String),

    #[error("no default system message present")]
    MissingDefault,

    #[error("storage error: {0}")]
    Storage(String),
}
