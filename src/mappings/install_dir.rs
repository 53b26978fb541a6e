//! Install Location Lookup
//!
//! The install directory is written by the product installer and read back
//! here to locate the mount executable. It is resolved fresh on every
//! create call; this component never writes it.

use super::constants::{INSTALL_DIR_VALUE, LTFS_ROOT_KEY};
use crate::error::{LtfsConfigError, Result};
use crate::store::ConfigStore;
use tracing::debug;

/// Read the configured install directory.
///
/// Any failure along the way (root key missing, value absent or not a
/// string) is reported as `ResolveFailed`.
pub fn resolve<S: ConfigStore>(store: &S) -> Result<String> {
    store.open(LTFS_ROOT_KEY).map_err(|e| {
        LtfsConfigError::resolve_failed(format!("{} is missing: {}", LTFS_ROOT_KEY, e))
    })?;

    let install_dir = store
        .read_string(LTFS_ROOT_KEY, INSTALL_DIR_VALUE)
        .map_err(|e| {
            LtfsConfigError::resolve_failed(format!("{} is unreadable: {}", INSTALL_DIR_VALUE, e))
        })?;

    debug!("Resolved install directory: {}", install_dir);
    Ok(install_dir)
}
