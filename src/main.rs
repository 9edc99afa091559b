//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `link_expander` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use link_expander::initialization::init_logger_with;
use link_expander::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so env-backed flags (PORT, LINK_EXPANDER_*) see it
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

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        eprintln!("link_expander error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
