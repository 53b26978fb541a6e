//! Command Line Derivation
//!
//! Builds the mount command line and trace target stored in each record.
//! Both are derived on every create; neither is ever edited in place.

use super::constants::{MOUNT_EXECUTABLE, TRACE_PIPE_PREFIX};
use super::{DriveLetter, MappingRequest};

/// Command line the mounting service launches for this mapping.
///
/// Shape: `<install dir>\ltfs.exe <target>: -o devname=<device> -d
/// -o log_directory=<log> -o work_directory=<work> [-o show_offline]`,
/// with the separator inserted only when the install dir lacks one.
pub fn build_command_line(install_dir: &str, request: &MappingRequest) -> String {
    format!(
        "{}{}{} {}: -o devname={} -d -o log_directory={} -o work_directory={}{}",
        install_dir,
        if install_dir.ends_with('\\') { "" } else { "\\" },
        MOUNT_EXECUTABLE,
        request.mount_target,
        request.device_name,
        request.log_dir,
        request.work_dir,
        if request.show_offline {
            " -o show_offline"
        } else {
            ""
        },
    )
}

/// Named-pipe trace channel for this mapping's mount process.
pub fn trace_target(letter: DriveLetter) -> String {
    format!("{}{}", TRACE_PIPE_PREFIX, letter)
}
