//! MessageRegistry — the in-memory role → system message map.
//!
//! Construction always succeeds: initial data that parses as a JSON object
//! of records becomes the map verbatim, anything else becomes the content of
//! a single protected `"default"` entry. `save`/`load` move the whole map
//! through a [`DurableStore`] as pretty-printed JSON; `load` is a wholesale
//! replacement ("reboot") and can take a timestamped backup of the outgoing
//! state first.

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::RegistryError;
use crate::record::MessageRecord;
use crate::store::DurableStore;
use crate::stores::fs::FsStore;

/// The reserved role. Present after construction, shielded from `edit`, and
/// removable only by a full `load`.
pub const DEFAULT_ROLE: &str = "default";

const JSON_EXT: &str = ".json";

pub struct MessageRegistry {
    entries: HashMap<String, MessageRecord>,
    auto_backup: bool,
    store: Box<dyn DurableStore>,
}

impl MessageRegistry {
    /// Build a registry persisting through the local filesystem.
    pub fn new(initial_data: &str) -> Self {
        Self::with_store(initial_data, Box::new(FsStore::new()))
    }

    /// Build a registry persisting through `store`.
    ///
    /// `initial_data` is first tried as a serialized registry (a JSON object
    /// of role → record); on any parse failure it becomes the content of a
    /// single `"default"` record instead. Neither branch is an error, and
    /// `auto_backup` starts on.
    pub fn with_store(initial_data: &str, store: Box<dyn DurableStore>) -> Self {
        let entries = match serde_json::from_str::<HashMap<String, MessageRecord>>(initial_data) {
            Ok(parsed) => parsed,
            Err(_) => {
                let mut entries = HashMap::new();
                entries.insert(
                    DEFAULT_ROLE.to_string(),
                    MessageRecord::new(DEFAULT_ROLE, initial_data),
                );
                entries
            }
        };
        Self {
            entries,
            auto_backup: true,
            store,
        }
    }

    /// Add a message under a new role.
    ///
    /// The check is purely presence-based: any existing role (including
    /// `"default"`) is protected from overwrite, and `"default"` itself may
    /// be re-added if a previous `load` dropped it.
    pub fn add(&mut self, role: &str, content: &str) -> Result<(), RegistryError> {
        if self.entries.contains_key(role) {
            return Err(RegistryError::DuplicateRole(role.to_string()));
        }
        self.entries
            .insert(role.to_string(), MessageRecord::new(role, content));
        Ok(())
    }

    /// Content for `role`, falling back to the default message when `role`
    /// is `None` or names no entry.
    ///
    /// Errors with [`RegistryError::MissingDefault`] only when the fallback
    /// is needed and no `"default"` entry exists — a state reachable solely
    /// through a `load` of data lacking that key.
    pub fn get(&self, role: Option<&str>) -> Result<&str, RegistryError> {
        if let Some(role) = role {
            if let Some(record) = self.entries.get(role) {
                return Ok(&record.content);
            }
        }
        self.entries
            .get(DEFAULT_ROLE)
            .map(|record| record.content.as_str())
            .ok_or(RegistryError::MissingDefault)
    }

    /// Replace the content stored under `role`.
    ///
    /// Returns `false` when the role is absent or is `"default"`; the two
    /// failure cases are deliberately indistinguishable.
    pub fn edit(&mut self, role: &str, new_content: &str) -> bool {
        if role == DEFAULT_ROLE {
            return false;
        }
        match self.entries.get_mut(role) {
            Some(record) => {
                record.content = new_content.to_string();
                true
            }
            None => false,
        }
    }

    /// Serialize the registry to pretty-printed JSON and write it to
    /// `filename`, overwriting any existing contents.
    ///
    /// `filename` must end with the literal `.json` (case-sensitive); the
    /// store is not touched otherwise.
    pub fn save(&self, filename: &str) -> Result<(), RegistryError> {
        if !filename.ends_with(JSON_EXT) {
            return Err(RegistryError::InvalidFilename(filename.to_string()));
        }
        let data = to_pretty_json(&self.entries)?;
        self.store.write(filename, &data)?;
        debug!(filename, entries = self.entries.len(), "registry saved");
        Ok(())
    }

    /// Replace the entire registry with the contents of `filename`.
    ///
    /// When `auto_backup` is on, the outgoing entries are first saved to a
    /// `<timestamp>-backup.json` file; that save is best-effort and its
    /// failure never blocks the load. The replacement itself is
    /// all-or-nothing: a read or parse failure leaves the current entries
    /// untouched and surfaces as [`RegistryError::Storage`].
    ///
    /// A loaded file is under no obligation to contain a `"default"` key —
    /// this is a full reboot of the registry, not a merge.
    pub fn load(&mut self, filename: &str) -> Result<(), RegistryError> {
        if self.auto_backup {
            let backup = backup_filename(Utc::now());
            if let Err(e) = self.save(&backup) {
                warn!(filename = %backup, "pre-load backup failed: {e}");
            }
        }

        let data = self.store.read(filename)?;
        let parsed: HashMap<String, MessageRecord> = serde_json::from_str(&data)
            .map_err(|e| RegistryError::Storage(format!("malformed {filename}: {e}")))?;

        info!(filename, entries = parsed.len(), "registry replaced from file");
        self.entries = parsed;
        Ok(())
    }

    /// Toggle the automatic pre-load backup.
    pub fn set_auto_backup(&mut self, status: bool) {
        self.auto_backup = status;
    }

    /// Whether a backup is taken before each `load`.
    pub fn auto_backup(&self) -> bool {
        self.auto_backup
    }

    /// Current role → record view, for callers that want to iterate.
    pub fn entries(&self) -> &HashMap<String, MessageRecord> {
        &self.entries
    }
}

/// Pretty-print with 4-space indentation (the registry's wire format;
/// serde_json's default pretty printer indents by 2).
fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, RegistryError> {
    let mut out = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, fmt);
    value
        .serialize(&mut ser)
        .map_err(|e| RegistryError::Storage(format!("serialise registry: {e}")))?;
    String::from_utf8(out).map_err(|e| RegistryError::Storage(format!("serialise registry: {e}")))
}

/// Backup filename for a load at `now`: the RFC 3339 UTC timestamp with `:`
/// and `.` replaced by `-`, suffixed `-backup.json`.
fn backup_filename(now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{stamp}-backup.json")
}
