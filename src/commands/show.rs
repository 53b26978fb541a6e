//! Show Command Handler
//!
//! Handles the `show` subcommand for printing the properties of a single
//! drive mapping.

use crate::display;
use crate::error::Result;
use crate::mappings::{DriveLetter, MappingStore};
use crate::store;
use std::path::PathBuf;
use tracing::debug;

pub async fn execute(store_path: Option<PathBuf>, drive_letter: DriveLetter) -> Result<()> {
    debug!("Reading mapping properties for drive {}", drive_letter);

    let store = store::open_default(store_path.as_deref())?;
    let mappings = MappingStore::new(store);

    let properties = mappings.mapping_properties(drive_letter)?;
    display::display_mapping(drive_letter, &properties);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LtfsConfigError;
    use crate::mappings::{mapping_key, DEVICE_NAME_VALUE, SERIAL_NUMBER_VALUE};
    use crate::store::{ConfigStore, FileStore, Value};
    use tempfile::tempdir;

    #[tokio::test]
    async fn show_prints_an_existing_mapping() {
        let dir = tempdir().unwrap();
        let store_path = dir.path().join("mappings.json");
        let letter = DriveLetter::new('E').unwrap();

        let mut store = FileStore::open(&store_path).unwrap();
        let key = mapping_key(letter);
        store.create_or_open(&key).unwrap();
        store
            .write_field(&key, DEVICE_NAME_VALUE, Value::Str(r"\\.\Tape0".into()))
            .unwrap();
        store
            .write_field(&key, SERIAL_NUMBER_VALUE, Value::Str("SN12345".into()))
            .unwrap();
        drop(store);

        execute(Some(store_path), letter).await.unwrap();
    }

    #[tokio::test]
    async fn show_of_unmapped_letter_fails() {
        let dir = tempdir().unwrap();
        let store_path = dir.path().join("mappings.json");
        let letter = DriveLetter::new('Q').unwrap();

        let result = execute(Some(store_path), letter).await;
        assert!(matches!(result, Err(LtfsConfigError::RecordNotFound(_))));
    }
}
