// Store layout shared with the LTFS mounting service (FUSE4WinSvc).
// The service reads these keys and values directly, so names, types and
// path shape are a compatibility contract.

/// Root key holding product-wide configuration.
pub const LTFS_ROOT_KEY: &str = r"Software\Hewlett-Packard\LTFS";

/// Parent key of the per-letter mapping records.
pub const MAPPINGS_KEY: &str = r"Software\Hewlett-Packard\LTFS\Mappings";

// Value names under the root key
pub const INSTALL_DIR_VALUE: &str = "InstallDir";

// Value names under each mapping key
pub const SERIAL_NUMBER_VALUE: &str = "SerialNumber";
pub const DEVICE_NAME_VALUE: &str = "DeviceName";
pub const COMMAND_LINE_VALUE: &str = "CommandLine";
pub const TRACE_TARGET_VALUE: &str = "TraceTarget";
pub const TRACE_TYPE_VALUE: &str = "TraceType";

/// Trace verbosity bitmask, identical for every mapping.
pub const TRACE_TYPE: u32 = 0x0000_0101;

/// Mount executable launched by the service, relative to the install dir.
pub const MOUNT_EXECUTABLE: &str = "ltfs.exe";

/// Named-pipe namespace for per-drive trace channels.
pub const TRACE_PIPE_PREFIX: &str = r"\\.\pipe\";
