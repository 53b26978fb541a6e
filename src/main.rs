mod cli;
mod commands;
mod display;
mod error;
mod logger;
mod mappings;
mod store;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::mappings::MappingRequest;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse_args();

    // Initialize logging system
    logger::init(args.verbose)?;

    debug!("ltfscfg starting");

    match run(args).await {
        Ok(_) => {
            info!("Operation completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Operation failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let Cli {
        command,
        store: store_path,
        verbose: _,
    } = args;

    match command {
        Commands::Map {
            drive_letter,
            device,
            serial,
            log_dir,
            work_dir,
            show_offline,
            mount_target,
        } => {
            let request = MappingRequest {
                drive_letter,
                device_name: device,
                serial_number: serial,
                log_dir,
                work_dir,
                show_offline,
                mount_target,
            };
            commands::map::execute(store_path, request).await
        }

        Commands::Unmap { drive_letter } => {
            commands::unmap::execute(store_path, drive_letter).await
        }

        Commands::List { detailed } => commands::list::execute(store_path, detailed).await,

        Commands::Count => commands::count::execute(store_path).await,

        Commands::Show { drive_letter } => commands::show::execute(store_path, drive_letter).await,
    }
}
