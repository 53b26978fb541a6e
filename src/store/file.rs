//! File-Backed Store
//!
//! JSON-file persistence with the same key/field model as the registry.
//! This backend makes the tool usable on hosts without a registry; the
//! mounting service does not read it, so mappings kept here are for
//! inspection and testing rather than live mounts.

use crate::error::{LtfsConfigError, Result};
use crate::store::{ConfigStore, MemoryStore, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl FileStore {
    /// Load the store at `path`, starting empty if the file does not
    /// exist yet. The file is created on the first mutation.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = if path.exists() {
            let text = fs::read_to_string(path).map_err(|e| {
                LtfsConfigError::store_unavailable(format!("{}: {}", path.display(), e))
            })?;
            serde_json::from_str(&text).map_err(|e| {
                LtfsConfigError::store_unavailable(format!("{}: {}", path.display(), e))
            })?
        } else {
            debug!("Store file {} does not exist yet", path.display());
            MemoryStore::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    /// Absolute location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.inner)
            .map_err(|e| LtfsConfigError::write_failed(format!("{}: {}", self.path.display(), e)))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl ConfigStore for FileStore {
    fn open(&self, path: &str) -> Result<()> {
        self.inner.open(path)
    }

    fn create_or_open(&mut self, path: &str) -> Result<()> {
        self.inner.create_or_open(path)?;
        self.save()
    }

    fn delete(&mut self, path: &str) -> Result<()> {
        self.inner.delete(path)?;
        self.save()
    }

    fn read_field(&self, path: &str, name: &str) -> Result<Value> {
        self.inner.read_field(path, name)
    }

    fn write_field(&mut self, path: &str, name: &str, value: Value) -> Result<()> {
        self.inner.write_field(path, name, value)?;
        self.save().map_err(|e| {
            LtfsConfigError::write_failed(format!("{}\\{}: {}", path, name, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(&dir.path().join("mappings.json")).unwrap();
        assert!(store.open(r"Software\Test").is_err());
    }

    #[test]
    fn fields_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mappings.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.create_or_open(r"Software\Test").unwrap();
            store
                .write_field(r"Software\Test", "Name", Value::Str("tape".into()))
                .unwrap();
            store
                .write_field(r"Software\Test", "Count", Value::Dword(257))
                .unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(
            store.read_field(r"Software\Test", "Name").unwrap(),
            Value::Str("tape".into())
        );
        assert_eq!(
            store.read_field(r"Software\Test", "Count").unwrap(),
            Value::Dword(257)
        );
    }

    #[test]
    fn delete_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mappings.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.create_or_open(r"Software\Test").unwrap();
            store.delete(r"Software\Test").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert!(matches!(
            store.open(r"Software\Test"),
            Err(LtfsConfigError::RecordNotFound(_))
        ));
    }

    #[test]
    fn parent_directories_are_created_on_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("mappings.json");

        let mut store = FileStore::open(&path).unwrap();
        store.create_or_open(r"Software\Test").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_is_store_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mappings.json");
        std::fs::write(&path, "not json at all {").unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(LtfsConfigError::StoreUnavailable(_))
        ));
    }
}
