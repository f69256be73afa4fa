//! Configuration management.
//!
//! The job is normally configured entirely from the environment, the way a
//! scheduled function is deployed:
//!
//! ```bash
//! export DYNAMODB_TABLE="orders"
//! export DYNAMODB_REGION="us-east-1"
//! export BACKUP_BUCKET="my-backups"
//! export MAX_CAPACITY="25"
//! ```
//!
//! A TOML file can supply the same settings; environment variables win.
//!
//! ```toml
//! [table]
//! name = "orders"
//! region = "us-east-1"
//!
//! [output]
//! bucket = "${BACKUP_BUCKET_NAME}"
//!
//! [export]
//! max_consumed_capacity = 25.0
//! scan_interval_ms = 1000
//! ```
//!
//! All four required settings must be present after both sources are
//! applied; a missing one is a configuration error and the job never starts.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{BackupConfig, ExportConfig, LoggingConfig, OutputConfig, TableConfig};
