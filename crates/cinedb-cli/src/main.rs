//! CineDB CLI - Main entry point

use cinedb_cli::{Cli, Commands};
use cinedb_common::logging::{init_logging, LogConfig, LogLevel};
use clap::Parser;
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Environment variables win; the verbose flag sets the level otherwise
    let mut log_config = LogConfig::from_env().unwrap_or_default();
    if std::env::var_os("LOG_LEVEL").is_none() {
        log_config.level = if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        };
    }
    log_config.log_file_prefix = "cinedb".to_string();

    // Initialize logging (ignore errors as the CLI should work without it)
    let _ = init_logging(&log_config);

    let result = execute_command(cli).await;

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: Cli) -> cinedb_cli::Result<()> {
    match cli.command {
        Commands::Load { data_dir } => cinedb_cli::commands::load::run(cli.db, data_dir).await,

        Commands::Query {
            list,
            name,
            sql,
            format,
        } => cinedb_cli::commands::query::run(
            &cli.db,
            list,
            name.as_deref(),
            sql.as_deref(),
            format,
        ),
    }
}
