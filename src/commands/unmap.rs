//! Unmap Command Handler
//!
//! Handles the `unmap` subcommand for removing a drive letter mapping.

use crate::error::Result;
use crate::mappings::{DriveLetter, MappingStore};
use crate::store;
use std::path::PathBuf;
use tracing::info;

pub async fn execute(store_path: Option<PathBuf>, drive_letter: DriveLetter) -> Result<()> {
    info!("Removing mapping for drive {}", drive_letter);

    let store = store::open_default(store_path.as_deref())?;
    let mut mappings = MappingStore::new(store);

    mappings.remove_mapping(drive_letter)?;

    println!("Drive {}: mapping removed", drive_letter);

    Ok(())
}
