//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `linkrank` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio_util::sync::CancellationToken;

use linkrank::initialization::{init_logger_with, init_redirect_client};
use linkrank::server::{self, AppState};
use linkrank::{check_url, Cli, Command, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists) so LINKRANK_*
    // settings apply without exporting them
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config::from(&cli);
    if let Err(e) = config.validate() {
        eprintln!("linkrank error: {}", e);
        process::exit(2);
    }

    let client = init_redirect_client(&config).context("Failed to initialize HTTP client")?;

    match cli.command {
        Command::Serve { bind, port } => {
            let state = AppState::new(client, config);
            if let Err(e) = server::serve(&bind, port, state).await {
                eprintln!("linkrank error: {:#}", e);
                process::exit(1);
            }
            Ok(())
        }
        Command::Check { url, pretty } => {
            let cancel = CancellationToken::new();
            let ctrl_c = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    ctrl_c.cancel();
                }
            });

            match check_url(&url, &client, &config, &cancel).await {
                Ok(report) => {
                    let json = if pretty {
                        serde_json::to_string_pretty(&report)
                    } else {
                        serde_json::to_string(&report)
                    }
                    .context("Failed to serialize report")?;
                    println!("{}", json);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("linkrank error: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
