//! Binding store: CRUD interactors over an injected persistence port
//!
//! Every mutation follows the same shape: load the whole persisted map,
//! apply one change, save the whole map back. The port is synchronous and
//! durable on return, so a mutation that has started always runs to
//! completion; there is no partially written mapping to observe.
//!
//! Failures are surfaced as [`StoreError`] carrying the port's cause; the
//! last durably persisted state stays authoritative and nothing is retried.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::binding::Binding;
use crate::codec::{parse_map, serialize_map, BindingMap};
use crate::types::KeyCode;

/// Opaque failure from a persistence backend.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// The persistence port: whole-map reads and writes, durable on return.
pub trait BindingPort {
    /// Read the current persisted mapping.
    fn load(&self) -> Result<BindingMap, PortError>;
    /// Replace the persisted mapping wholesale.
    fn save(&self, map: &BindingMap) -> Result<(), PortError>;
}

/// A store operation failed inside the persistence port.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the persisted mapping failed.
    #[error("failed to load persisted keybindings: {source}")]
    Load { source: PortError },
    /// Writing the mapping back failed.
    #[error("failed to save keybindings: {source}")]
    Save { source: PortError },
}

impl StoreError {
    /// Stable key the UI layer can localize into a user-facing message.
    pub fn message_key(&self) -> &'static str {
        "internal_error"
    }
}

/// CRUD interactors over one persistence port.
///
/// The port is an explicit constructor argument, not a process-wide
/// lookup; callers decide where bindings live.
pub struct BindingStore<P: BindingPort> {
    port: P,
}

impl<P: BindingPort> BindingStore<P> {
    /// Create a store backed by `port`.
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Snapshot of the current persisted mapping.
    pub fn get(&self) -> Result<BindingMap, StoreError> {
        self.port.load().map_err(|source| {
            tracing::error!(error = %source, "keybinding load failed");
            StoreError::Load { source }
        })
    }

    /// Set (or overwrite) the binding for `key` and persist the whole map.
    ///
    /// Creating and rebinding are the same write; the distinction only
    /// exists in the editing UI. Idempotent for equal `(key, binding)`.
    pub fn rebind(&self, key: KeyCode, binding: Binding) -> Result<(), StoreError> {
        let mut map = self.get()?;
        map.insert(key, binding);
        self.save(&map)
    }

    /// Bind a key for the first time.
    ///
    /// Identical to [`BindingStore::rebind`]; the editing UI keeps separate
    /// entry points for intent, the stored result is the same.
    pub fn create(&self, key: KeyCode, binding: Binding) -> Result<(), StoreError> {
        self.rebind(key, binding)
    }

    /// Remove the binding for `key`, if any, and persist the whole map.
    ///
    /// Deleting an absent key is a success no-op.
    pub fn delete(&self, key: KeyCode) -> Result<(), StoreError> {
        let mut map = self.get()?;
        map.remove(&key);
        self.save(&map)
    }

    fn save(&self, map: &BindingMap) -> Result<(), StoreError> {
        self.port.save(map).map_err(|source| {
            tracing::error!(error = %source, "keybinding save failed");
            StoreError::Save { source }
        })
    }
}

/// Flat-file persistence port using the wire format from [`crate::codec`].
///
/// Reading a missing file is a port error, not an empty map; the caller's
/// fallback policy (see [`crate::defaults::load_or_default`]) decides what
/// a fresh install starts from.
pub struct FilePort {
    path: PathBuf,
}

impl FilePort {
    /// A port persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A port at the per-user default location, if one can be determined.
    pub fn at_default_location() -> Option<Self> {
        crate::config_paths::bindings_file().map(Self::new)
    }

    /// The file this port reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl BindingPort for FilePort {
    fn load(&self) -> Result<BindingMap, PortError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(parse_map(text.trim_end())?)
    }

    fn save(&self, map: &BindingMap) -> Result<(), PortError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serialize_map(map))?;
        Ok(())
    }
}

/// In-memory persistence port for tests and embedders without a disk.
#[derive(Default)]
pub struct MemoryPort {
    map: Mutex<BindingMap>,
}

impl MemoryPort {
    /// An empty in-memory port.
    pub fn new() -> Self {
        Self::default()
    }

    /// A port pre-populated with `map`.
    pub fn with_map(map: BindingMap) -> Self {
        Self {
            map: Mutex::new(map),
        }
    }
}

impl BindingPort for MemoryPort {
    fn load(&self) -> Result<BindingMap, PortError> {
        Ok(self.map.lock().unwrap().clone())
    }

    fn save(&self, map: &BindingMap) -> Result<(), PortError> {
        *self.map.lock().unwrap() = map.clone();
        Ok(())
    }
}
