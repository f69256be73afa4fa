//! Validate config command implementation

use crate::config::load_config;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(config_path = ?config_path, "Validating configuration");

        let config = match load_config(config_path.map(Path::new)) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Table: {}", config.table.name);
        println!("  Region: {}", config.table.region);
        if let Some(endpoint) = &config.table.endpoint_url {
            println!("  Endpoint: {endpoint}");
        }
        println!("  Bucket: {}", config.output.bucket);
        println!(
            "  Max consumed capacity: {}",
            config.export.max_consumed_capacity
        );
        println!("  Scan interval: {}ms", config.export.scan_interval_ms);
        println!("  Dry run: {}", config.export.dry_run);
        println!();

        Ok(0)
    }
}
