//! Durable key-value storage for portal state.
//!
//! Two slots are persisted: the registered-user list and the active
//! session. Loads and saves are best-effort by contract: a missing
//! backend, an unreadable file, or a malformed payload degrades to the
//! slot's default instead of surfacing an error to the caller.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Named slots in durable storage, each holding one serialized value.
///
/// Object safe so state aggregates can hold any backend behind a
/// reference. All three operations fail soft.
pub trait KeyValueStore {
    /// Returns the raw payload for `key`, or `None` when the slot is absent.
    fn load(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`. Failures are logged, never surfaced.
    fn save(&self, key: &str, value: &str);

    /// Deletes the slot for `key`, if present.
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) {
        (**self).save(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// Deserializes a slot, treating corrupt payloads as absent.
pub fn load_slot<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.load(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Discarding malformed payload in slot {key}: {err}");
            None
        }
    }
}

/// Serializes `value` into a slot. Serialization failures are swallowed.
pub fn save_slot<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.save(key, &json),
        Err(err) => warn!("Failed to serialize slot {key}: {err}"),
    }
}

/// File-backed store: one file per slot under a single directory.
///
/// Filenames are the slot keys themselves, no extension, keeping the
/// persisted key contract byte-stable across backends.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Opens the store under the portal data directory.
    pub fn open_default() -> Self {
        Self::new(crate::paths::data_dir())
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!("Failed to read slot {}: {err}", path.display());
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            warn!(
                "Failed to create storage directory {}: {err}",
                self.dir.display()
            );
            return;
        }

        let path = self.slot_path(key);
        if let Err(err) = fs::write(&path, value) {
            warn!("Failed to write slot {}: {err}", path.display());
        }
    }

    fn remove(&self, key: &str) {
        let path = self.slot_path(key);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => warn!("Failed to remove slot {}: {err}", path.display()),
        }
    }
}

/// In-memory store for tests and environments with no durable backend.
///
/// Single-threaded interior mutability matches the event-driven model:
/// no handler suspends while holding a slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}
