//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};

/// ddb-backup - full DynamoDB table export to S3
#[derive(Parser, Debug)]
#[command(name = "ddb-backup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Optional TOML configuration file; the environment is always applied
    #[arg(short, long, env = "BACKUP_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", env = "BACKUP_LOG_LEVEL")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "BACKUP_LOG_JSON")]
    pub log_json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the configured table to the configured bucket
    Export(commands::export::ExportArgs),

    /// Validate configuration without contacting AWS
    ValidateConfig(commands::validate::ValidateArgs),
}
