// ddb-backup - DynamoDB to S3 backup job
// Copyright (c) 2025 ddb-backup Contributors
// Licensed under the MIT License

use clap::Parser;
use ddb_backup::cli::{Cli, Commands};
use ddb_backup::config::LoggingConfig;
use ddb_backup::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Optional; a missing .env is ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let logging_config = LoggingConfig {
        level: cli.log_level.clone(),
        json: cli.log_json,
    };
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(2);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "ddb-backup - DynamoDB to S3 backup"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Export(args) => args.execute(config_path).await,
        Commands::ValidateConfig(args) => args.execute(config_path).await,
    }
}
