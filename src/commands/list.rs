//! List Command Handler
//!
//! Handles the `list` subcommand for showing all configured drive mappings.

use crate::display;
use crate::error::{LtfsConfigError, Result};
use crate::mappings::{DriveLetter, MappingProperties, MappingStore};
use crate::store::{self, ConfigStore};
use std::path::PathBuf;
use tracing::debug;

pub async fn execute(store_path: Option<PathBuf>, detailed: bool) -> Result<()> {
    let store = store::open_default(store_path.as_deref())?;
    let mappings = MappingStore::new(store);

    let rows = gather(&mappings)?;
    debug!("Found {} configured mapping(s)", rows.len());

    display::display_mapping_table(&rows, detailed);

    Ok(())
}

/// Collects the properties of every mapped drive letter in ascending order.
///
/// Unmapped letters are skipped. Any other failure aborts the scan so a
/// broken store is not silently reported as empty.
fn gather<S: ConfigStore>(
    mappings: &MappingStore<S>,
) -> Result<Vec<(DriveLetter, MappingProperties)>> {
    let mut rows = Vec::new();
    for letter in DriveLetter::all() {
        match mappings.mapping_properties(letter) {
            Ok(properties) => rows.push((letter, properties)),
            Err(LtfsConfigError::RecordNotFound(_)) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(rows)
}
