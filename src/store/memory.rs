//! In-Memory Store
//!
//! A process-local store used by tests and as the map behind the file
//! backend. Intermediate path components are not materialized as keys of
//! their own; no store consumer ever opens one.

use crate::error::{LtfsConfigError, Result};
use crate::store::{ConfigStore, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    keys: BTreeMap<String, BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn open(&self, path: &str) -> Result<()> {
        if self.keys.contains_key(path) {
            Ok(())
        } else {
            Err(LtfsConfigError::record_not_found(path))
        }
    }

    fn create_or_open(&mut self, path: &str) -> Result<()> {
        self.keys.entry(path.to_string()).or_default();
        Ok(())
    }

    fn delete(&mut self, path: &str) -> Result<()> {
        match self.keys.remove(path) {
            Some(_) => Ok(()),
            None => Err(LtfsConfigError::record_not_found(path)),
        }
    }

    fn read_field(&self, path: &str, name: &str) -> Result<Value> {
        let fields = self
            .keys
            .get(path)
            .ok_or_else(|| LtfsConfigError::record_not_found(path))?;

        fields.get(name).cloned().ok_or_else(|| {
            LtfsConfigError::read_failed(format!("no value named {} under {}", name, path))
        })
    }

    fn write_field(&mut self, path: &str, name: &str, value: Value) -> Result<()> {
        let fields = self
            .keys
            .get_mut(path)
            .ok_or_else(|| LtfsConfigError::record_not_found(path))?;

        fields.insert(name.to_string(), value);
        Ok(())
    }
}
