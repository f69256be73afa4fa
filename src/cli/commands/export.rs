//! Export command implementation

use crate::config::load_config;
use crate::core::export::BackupCoordinator;
use clap::Args;
use std::path::Path;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Scan and serialize the table without writing to the bucket
    #[arg(long)]
    pub dry_run: bool,

    /// Override the spacing between scan requests in milliseconds
    #[arg(long, value_name = "MS")]
    pub scan_interval_ms: Option<u64>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path.map(Path::new)) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("{e}");
                return Ok(2);
            }
        };

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.export.dry_run = true;
        }
        if let Some(interval) = self.scan_interval_ms {
            tracing::info!(scan_interval_ms = interval, "Overriding scan interval from CLI");
            config.export.scan_interval_ms = interval;
        }

        let mut coordinator = match BackupCoordinator::from_config(&config).await {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create backup coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(4);
            }
        };

        let summary = match coordinator.execute().await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Export failed: {e}");
                return Ok(5);
            }
        };

        println!("Export Summary:");
        println!("  Table: {}", config.table.name);
        println!("  Run ID: {}", summary.run_id);
        println!("  Timestamp: {}", summary.timestamp);
        println!("  Rows: {}", summary.rows);
        println!("  Scan requests: {}", summary.iterations);
        println!("  Data size: {} bytes", summary.data_bytes);
        println!("  SHA-256: {}", summary.data_checksum);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        if summary.dry_run {
            println!("  Dry run: no objects written");
        } else {
            for key in &summary.objects_written {
                println!("  Wrote s3://{}/{}", config.output.bucket, key);
            }
        }

        Ok(0)
    }
}
