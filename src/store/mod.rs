//! Configuration Store Abstraction
//!
//! This module defines the hierarchical key/value store that mapping
//! records are persisted in, plus the available backends: the Windows
//! registry (the store the mounting service reads), a JSON file, and an
//! in-memory fake for tests.

pub mod file;
pub mod memory;
#[cfg(windows)]
pub mod registry;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;
#[cfg(windows)]
pub use self::registry::RegistryStore;

use crate::error::{LtfsConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A scalar field value stored under a key.
///
/// Only the two shapes the mapping layout uses are supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// String value (`REG_SZ` in the registry backend).
    Str(String),
    /// 32-bit integer value (`REG_DWORD` in the registry backend).
    Dword(u32),
}

/// Path-addressed hierarchical key/value store.
///
/// Keys are backslash-joined path strings (registry style); each key holds
/// named scalar fields. Implementations provide no cross-process locking;
/// callers that may run concurrently against the same key must serialize
/// access themselves.
pub trait ConfigStore {
    /// Probe a key for existence, read-only.
    ///
    /// Returns `RecordNotFound` when the key is absent; any other error
    /// means the store itself misbehaved.
    fn open(&self, path: &str) -> Result<()>;

    /// Create a key if it does not exist yet, keeping existing fields
    /// when it does.
    fn create_or_open(&mut self, path: &str) -> Result<()>;

    /// Delete a key and every field under it, as a unit.
    ///
    /// Deleting an absent key is an error, not a no-op.
    fn delete(&mut self, path: &str) -> Result<()>;

    /// Read one named field from a key.
    fn read_field(&self, path: &str, name: &str) -> Result<Value>;

    /// Write one named field under an existing key.
    fn write_field(&mut self, path: &str, name: &str, value: Value) -> Result<()>;

    /// Read a field that must hold a string.
    fn read_string(&self, path: &str, name: &str) -> Result<String> {
        match self.read_field(path, name)? {
            Value::Str(s) => Ok(s),
            Value::Dword(_) => Err(LtfsConfigError::read_failed(format!(
                "{}\\{} is not a string value",
                path, name
            ))),
        }
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for Box<S> {
    fn open(&self, path: &str) -> Result<()> {
        (**self).open(path)
    }

    fn create_or_open(&mut self, path: &str) -> Result<()> {
        (**self).create_or_open(path)
    }

    fn delete(&mut self, path: &str) -> Result<()> {
        (**self).delete(path)
    }

    fn read_field(&self, path: &str, name: &str) -> Result<Value> {
        (**self).read_field(path, name)
    }

    fn write_field(&mut self, path: &str, name: &str, value: Value) -> Result<()> {
        (**self).write_field(path, name, value)
    }
}

/// Open the configuration store a command should operate on.
///
/// A `--store <FILE>` override always selects the JSON file backend. The
/// default is the registry under `HKEY_LOCAL_MACHINE` on Windows, and a
/// per-user JSON file elsewhere (useful for inspection and testing; the
/// mounting service itself only reads the registry).
pub fn open_default(file_override: Option<&Path>) -> Result<Box<dyn ConfigStore>> {
    if let Some(path) = file_override {
        debug!("Using file-backed store: {}", path.display());
        return Ok(Box::new(FileStore::open(path)?));
    }

    #[cfg(windows)]
    {
        debug!("Using registry store under HKEY_LOCAL_MACHINE");
        Ok(Box::new(RegistryStore::local_machine()))
    }

    #[cfg(not(windows))]
    {
        let path = default_store_path()?;
        debug!("Using file-backed store: {}", path.display());
        Ok(Box::new(FileStore::open(&path)?))
    }
}

#[cfg(not(windows))]
fn default_store_path() -> Result<std::path::PathBuf> {
    let base = dirs::data_local_dir().ok_or_else(|| {
        LtfsConfigError::store_unavailable("no per-user data directory on this system")
    })?;
    Ok(base.join("ltfscfg").join("mappings.json"))
}
