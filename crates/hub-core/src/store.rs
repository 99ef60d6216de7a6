use crate::error::Result;
use crate::io::atomic_write;
use crate::paths;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// StorageBackend
// ---------------------------------------------------------------------------

/// Raw string transport for one namespaced key.
///
/// Backends move opaque strings; everything about JSON lives in [`Store`].
pub trait StorageBackend {
    /// Returns the stored string, or `None` when the key has never been set.
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, raw: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// Keys map to `<dir>/<key>.json`, written atomically.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        paths::key_file(&self.dir, key)
    }
}

impl StorageBackend for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, raw: &str) -> Result<()> {
        atomic_write(&self.key_path(key), raw)
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory backend for tests. `failing()` makes every write error, which
/// models a full or unavailable storage device.
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            fail_writes: true,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, raw: &str) -> Result<()> {
        if self.fail_writes {
            return Err(std::io::Error::other("writes disabled").into());
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Typed key-value store over a [`StorageBackend`].
///
/// Reads never fail: a missing key, an unreadable backend, or a stored
/// document that no longer decodes as `T` all collapse to the caller's
/// fallback value. Writes report success as a `bool` so callers can keep
/// going with their in-memory state when persistence is unavailable.
pub struct Store {
    backend: Box<dyn StorageBackend>,
}

impl Store {
    /// File-backed store rooted at `<root>/.hub/`.
    pub fn open(root: &Path) -> Self {
        Self::with_backend(Box::new(FileStore::new(paths::hub_dir(root))))
    }

    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::with_backend(Box::new(MemoryStore::new()))
    }

    /// Decode the value under `key`, or return `fallback`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(e) => {
                debug!("could not read '{key}': {e}; using fallback");
                return fallback;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                debug!("stored value under '{key}' does not decode: {e}; using fallback");
                fallback
            }
        }
    }

    /// Encode and persist `value` under `key`. Returns false when the write
    /// could not be completed.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string_pretty(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("could not encode value for '{key}': {e}");
                return false;
            }
        };
        match self.backend.write(key, &raw) {
            Ok(()) => true,
            Err(e) => {
                warn!("could not persist '{key}': {e}");
                false
            }
        }
    }

    /// Best-effort delete. A backend failure is logged, not surfaced.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            debug!("could not remove '{key}': {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
