//! promptbank — role-keyed system message registry with JSON persistence.
//!
//! A [`MessageRegistry`] owns an in-memory map from role name to
//! [`MessageRecord`] and guarantees a protected `"default"` entry exists at
//! construction. The whole map can be saved to and reloaded from a JSON file
//! through a pluggable [`DurableStore`]; a destructive reload can take an
//! automatic timestamped backup of the outgoing state first.

pub mod error;
pub mod record;
pub mod registry;
pub mod store;
pub mod stores;

// Re-export the core vocabulary so callers can write `promptbank::MessageRegistry`
// etc. without spelling out the sub-module.
pub use error::RegistryError;
pub use record::MessageRecord;
pub use registry::{DEFAULT_ROLE, MessageRegistry};
pub use store::DurableStore;
pub use stores::fs::FsStore;
pub use stores::mem::MemStore;
