use std::fs::File;
use std::process::ExitCode;

use citadel::cli::{Args, Commands, run_admin};
use citadel::core::config::{load_config, resolve};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to citadel.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("citadel.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        Default::default()
    });
    let config = resolve(&file_config, &args.overrides());
    log::info!("Citadel starting up against {}", config.api_base_url);

    match args.command {
        Some(Commands::Admin { resource }) => match run_admin(resource, &config).await {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::warn!("Admin command failed: {}", e);
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        None => match citadel::tui::run(config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
