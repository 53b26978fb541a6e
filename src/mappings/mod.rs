//! Drive Mapping Records
//!
//! One record per mapped drive letter, persisted in the configuration
//! store where the LTFS mounting service discovers which tape devices to
//! mount and how to launch them.

pub mod command_line;
pub mod constants;
pub mod drive_letter;
pub mod install_dir;

pub use self::constants::*;
pub use self::drive_letter::{DriveLetter, MAX_DRIVE_LETTER, MIN_DRIVE_LETTER};

use crate::error::{LtfsConfigError, Result};
use crate::store::{ConfigStore, Value};
use serde::Serialize;
use tracing::{debug, info};

/// Inputs for creating one mapping record.
#[derive(Debug, Clone, Serialize)]
pub struct MappingRequest {
    pub drive_letter: DriveLetter,
    /// Physical tape device path, e.g. `\\.\Tape0`.
    pub device_name: String,
    /// Device serial number, treated as opaque.
    pub serial_number: String,
    /// Directory the mount process logs into.
    pub log_dir: String,
    /// Working directory for the mount process.
    pub work_dir: String,
    /// Ask the mount to expose offline volumes.
    pub show_offline: bool,
    /// Mount point letter baked into the generated command line. The
    /// mounting service historically expects `T:` here regardless of the
    /// mapped letter, so this is a separate knob rather than an alias of
    /// `drive_letter`.
    pub mount_target: DriveLetter,
}

/// Properties read back from an existing mapping.
#[derive(Debug, Clone, Serialize)]
pub struct MappingProperties {
    pub device_name: String,
    pub serial_number: String,
}

/// Store key of one letter's record.
pub fn mapping_key(letter: DriveLetter) -> String {
    format!(r"{}\{}", MAPPINGS_KEY, letter)
}

/// Mapping operations over a configuration store.
///
/// Every operation is a short sequence of discrete store accesses; no
/// transaction spans a sequence. Concurrent processes mutating the same
/// letter race per field, so callers must serialize access externally if
/// that can happen.
pub struct MappingStore<S: ConfigStore> {
    store: S,
}

impl<S: ConfigStore> MappingStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create or replace the record for `request.drive_letter`.
    ///
    /// Fields are written in a fixed order: `SerialNumber`, `DeviceName`,
    /// `CommandLine` (after resolving the install directory),
    /// `TraceTarget`, `TraceType`. The first failure aborts the sequence
    /// and is returned; fields already written stay in place, there is no
    /// rollback. An unresolvable install location therefore leaves a
    /// record holding only serial and device name.
    pub fn create_mapping(&mut self, request: &MappingRequest) -> Result<()> {
        let path = mapping_key(request.drive_letter);
        debug!("Creating mapping record at {}", path);

        self.store.create_or_open(&path)?;
        self.store.write_field(
            &path,
            SERIAL_NUMBER_VALUE,
            Value::Str(request.serial_number.clone()),
        )?;
        self.store.write_field(
            &path,
            DEVICE_NAME_VALUE,
            Value::Str(request.device_name.clone()),
        )?;

        let install_dir = install_dir::resolve(&self.store)?;
        let command = command_line::build_command_line(&install_dir, request);
        self.store
            .write_field(&path, COMMAND_LINE_VALUE, Value::Str(command))?;

        self.store.write_field(
            &path,
            TRACE_TARGET_VALUE,
            Value::Str(command_line::trace_target(request.drive_letter)),
        )?;
        self.store
            .write_field(&path, TRACE_TYPE_VALUE, Value::Dword(TRACE_TYPE))?;

        info!(
            "Mapped drive {} to {} (serial {})",
            request.drive_letter, request.device_name, request.serial_number
        );
        Ok(())
    }

    /// Delete the record for `letter` and everything under it.
    ///
    /// Removing a letter that is not mapped is an error.
    pub fn remove_mapping(&mut self, letter: DriveLetter) -> Result<()> {
        let path = mapping_key(letter);
        self.store.delete(&path)?;
        info!("Removed mapping for drive {}", letter);
        Ok(())
    }

    /// Number of currently mapped drive letters.
    ///
    /// Probes every valid letter; a missing record is the expected case
    /// and skipped, while any other store failure aborts the enumeration
    /// without a partial count.
    pub fn mapping_count(&self) -> Result<usize> {
        let mut count = 0;
        for letter in DriveLetter::all() {
            match self.store.open(&mapping_key(letter)) {
                Ok(()) => count += 1,
                Err(LtfsConfigError::RecordNotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }
        debug!("Counted {} mapping records", count);
        Ok(count)
    }

    /// Device name and serial number of the mapping for `letter`.
    ///
    /// Fails with `RecordNotFound` when the letter is not mapped; a
    /// failing field read aborts immediately.
    pub fn mapping_properties(&self, letter: DriveLetter) -> Result<MappingProperties> {
        let path = mapping_key(letter);
        self.store.open(&path)?;

        let device_name = self.store.read_string(&path, DEVICE_NAME_VALUE)?;
        let serial_number = self.store.read_string(&path, SERIAL_NUMBER_VALUE)?;

        Ok(MappingProperties {
            device_name,
            serial_number,
        })
    }
}
