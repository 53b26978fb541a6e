//! Map Command Handler
//!
//! Handles the `map` subcommand for creating or replacing a drive letter
//! mapping.

use crate::error::Result;
use crate::mappings::{MappingRequest, MappingStore};
use crate::store;
use std::path::PathBuf;
use tracing::info;

pub async fn execute(store_path: Option<PathBuf>, request: MappingRequest) -> Result<()> {
    info!(
        "Mapping drive {} to device {}",
        request.drive_letter, request.device_name
    );

    let store = store::open_default(store_path.as_deref())?;
    let mut mappings = MappingStore::new(store);

    mappings.create_mapping(&request)?;

    println!(
        "Drive {}: mapped to {} (serial {})",
        request.drive_letter, request.device_name, request.serial_number
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LtfsConfigError;
    use crate::mappings::{
        DriveLetter, COMMAND_LINE_VALUE, DEVICE_NAME_VALUE, INSTALL_DIR_VALUE, LTFS_ROOT_KEY,
        SERIAL_NUMBER_VALUE, TRACE_TARGET_VALUE, TRACE_TYPE_VALUE,
    };
    use crate::store::{ConfigStore, FileStore, Value};
    use std::path::Path;
    use tempfile::tempdir;

    fn seed_install_dir(path: &Path) {
        let mut store = FileStore::open(path).unwrap();
        store.create_or_open(LTFS_ROOT_KEY).unwrap();
        store
            .write_field(
                LTFS_ROOT_KEY,
                INSTALL_DIR_VALUE,
                Value::Str(r"C:\Program Files\LTFS".into()),
            )
            .unwrap();
    }

    fn request() -> MappingRequest {
        MappingRequest {
            drive_letter: DriveLetter::new('E').unwrap(),
            device_name: r"\\.\Tape0".to_string(),
            serial_number: "SN12345".to_string(),
            log_dir: r"C:\logs".to_string(),
            work_dir: r"C:\work".to_string(),
            show_offline: true,
            mount_target: DriveLetter::DEFAULT_MOUNT_TARGET,
        }
    }

    #[tokio::test]
    async fn map_persists_the_full_record() {
        let dir = tempdir().unwrap();
        let store_path = dir.path().join("mappings.json");
        seed_install_dir(&store_path);

        execute(Some(store_path.clone()), request()).await.unwrap();

        let store = FileStore::open(&store_path).unwrap();
        let key = crate::mappings::mapping_key(DriveLetter::new('E').unwrap());
        assert_eq!(
            store.read_field(&key, SERIAL_NUMBER_VALUE).unwrap(),
            Value::Str("SN12345".into())
        );
        assert_eq!(
            store.read_field(&key, DEVICE_NAME_VALUE).unwrap(),
            Value::Str(r"\\.\Tape0".into())
        );
        assert_eq!(
            store.read_field(&key, COMMAND_LINE_VALUE).unwrap(),
            Value::Str(
                r"C:\Program Files\LTFS\ltfs.exe T: -o devname=\\.\Tape0 -d -o log_directory=C:\logs -o work_directory=C:\work -o show_offline"
                    .into()
            )
        );
        assert_eq!(
            store.read_field(&key, TRACE_TARGET_VALUE).unwrap(),
            Value::Str(r"\\.\pipe\E".into())
        );
        assert_eq!(
            store.read_field(&key, TRACE_TYPE_VALUE).unwrap(),
            Value::Dword(0x0000_0101)
        );
    }

    #[tokio::test]
    async fn map_without_install_dir_fails_but_keeps_partial_record() {
        let dir = tempdir().unwrap();
        let store_path = dir.path().join("mappings.json");

        let result = execute(Some(store_path.clone()), request()).await;
        assert!(matches!(result, Err(LtfsConfigError::ResolveFailed(_))));

        let store = FileStore::open(&store_path).unwrap();
        let key = crate::mappings::mapping_key(DriveLetter::new('E').unwrap());
        assert_eq!(
            store.read_field(&key, SERIAL_NUMBER_VALUE).unwrap(),
            Value::Str("SN12345".into())
        );
        assert!(store.read_field(&key, COMMAND_LINE_VALUE).is_err());
    }
}
