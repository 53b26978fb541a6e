//! Count Command Handler
//!
//! Handles the `count` subcommand for printing the number of configured
//! drive mappings.

use crate::error::Result;
use crate::mappings::MappingStore;
use crate::store;
use std::path::PathBuf;
use tracing::debug;

pub async fn execute(store_path: Option<PathBuf>) -> Result<()> {
    let store = store::open_default(store_path.as_deref())?;
    let mappings = MappingStore::new(store);

    let count = mappings.mapping_count()?;
    debug!("Counted {} mapping(s)", count);

    println!("{}", count);

    Ok(())
}
