use crate::mappings::DriveLetter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ltfscfg")]
#[command(about = "Configure LTFS tape drive mappings for the mounting service")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use a JSON file as the configuration store instead of the
    /// platform default
    #[arg(short, long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create or replace a drive letter mapping
    Map {
        /// Drive letter to map (C-Z)
        #[arg(value_name = "LETTER")]
        drive_letter: DriveLetter,

        /// Tape device path (e.g. \\.\Tape0)
        #[arg(value_name = "DEVICE")]
        device: String,

        /// Device serial number
        #[arg(value_name = "SERIAL")]
        serial: String,

        /// Directory for mount process log output
        #[arg(long, value_name = "DIR")]
        log_dir: String,

        /// Working directory for the mount process
        #[arg(long, value_name = "DIR")]
        work_dir: String,

        /// Expose offline volumes on the mounted drive
        #[arg(long)]
        show_offline: bool,

        /// Mount point letter placed in the generated command line
        #[arg(long, value_name = "LETTER", default_value_t = DriveLetter::DEFAULT_MOUNT_TARGET)]
        mount_target: DriveLetter,
    },

    /// Remove a drive letter mapping
    Unmap {
        /// Mapped drive letter
        #[arg(value_name = "LETTER")]
        drive_letter: DriveLetter,
    },

    /// List the configured mappings
    List {
        /// Show device and serial details per mapping
        #[arg(short, long)]
        detailed: bool,
    },

    /// Print the number of configured mappings
    Count,

    /// Show the properties of one mapping
    Show {
        /// Mapped drive letter
        #[arg(value_name = "LETTER")]
        drive_letter: DriveLetter,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_map_command() {
        let cli = Cli::try_parse_from([
            "ltfscfg",
            "map",
            "E",
            r"\\.\Tape0",
            "SN12345",
            "--log-dir",
            r"C:\logs",
            "--work-dir",
            r"C:\work",
            "--show-offline",
        ])
        .unwrap();

        match cli.command {
            Commands::Map {
                drive_letter,
                device,
                serial,
                log_dir,
                work_dir,
                show_offline,
                mount_target,
            } => {
                assert_eq!(drive_letter.as_char(), 'E');
                assert_eq!(device, r"\\.\Tape0");
                assert_eq!(serial, "SN12345");
                assert_eq!(log_dir, r"C:\logs");
                assert_eq!(work_dir, r"C:\work");
                assert!(show_offline);
                assert_eq!(mount_target.as_char(), 'T');
            }
            _ => panic!("expected map command"),
        }
    }

    #[test]
    fn map_accepts_colon_letter_and_mount_target_override() {
        let cli = Cli::try_parse_from([
            "ltfscfg",
            "map",
            "e:",
            r"\\.\Tape1",
            "SN1",
            "--log-dir",
            r"C:\logs",
            "--work-dir",
            r"C:\work",
            "--mount-target",
            "M",
        ])
        .unwrap();

        match cli.command {
            Commands::Map {
                drive_letter,
                mount_target,
                show_offline,
                ..
            } => {
                assert_eq!(drive_letter.as_char(), 'E');
                assert_eq!(mount_target.as_char(), 'M');
                assert!(!show_offline);
            }
            _ => panic!("expected map command"),
        }
    }

    #[test]
    fn rejects_out_of_range_drive_letter() {
        let result = Cli::try_parse_from(["ltfscfg", "unmap", "A"]);
        assert!(result.is_err());
    }

    #[test]
    fn map_requires_log_and_work_directories() {
        let result = Cli::try_parse_from(["ltfscfg", "map", "E", r"\\.\Tape0", "SN12345"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_global_store_override() {
        let cli =
            Cli::try_parse_from(["ltfscfg", "count", "--store", "/tmp/mappings.json"]).unwrap();

        assert!(matches!(cli.command, Commands::Count));
        assert_eq!(cli.store.unwrap(), PathBuf::from("/tmp/mappings.json"));
    }

    #[test]
    fn parses_list_detailed_flag() {
        let cli = Cli::try_parse_from(["ltfscfg", "list", "--detailed"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List { detailed: true }
        ));
    }
}
