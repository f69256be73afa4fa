//! Configuration schema types
//!
//! Every field can come from the optional TOML file or from the
//! environment; validation runs after both have been applied.

use serde::{Deserialize, Serialize};

/// Main backup configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Source table settings
    #[serde(default)]
    pub table: TableConfig,

    /// Output bucket settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Export loop settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl BackupConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing or invalid setting
    pub fn validate(&self) -> Result<(), String> {
        self.table.validate()?;
        self.output.validate()?;
        self.export.validate()?;
        Ok(())
    }
}

/// Source table configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConfig {
    /// Table to export (`DYNAMODB_TABLE`)
    #[serde(default)]
    pub name: String,

    /// AWS region of the table, also used for the bucket (`DYNAMODB_REGION`)
    #[serde(default)]
    pub region: String,

    /// Custom endpoint for DynamoDB Local or an S3-compatible server
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl TableConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("table.name is required (set DYNAMODB_TABLE)".to_string());
        }
        if self.region.trim().is_empty() {
            return Err("table.region is required (set DYNAMODB_REGION)".to_string());
        }
        if let Some(endpoint) = &self.endpoint_url {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!(
                    "table.endpoint_url must start with http:// or https://, got '{endpoint}'"
                ));
            }
        }
        Ok(())
    }
}

/// Output bucket configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Bucket receiving the backup objects (`BACKUP_BUCKET`)
    #[serde(default)]
    pub bucket: String,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bucket.trim().is_empty() {
            return Err("output.bucket is required (set BACKUP_BUCKET)".to_string());
        }
        Ok(())
    }
}

/// Export loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Capacity ceiling the page size is tuned toward (`MAX_CAPACITY`)
    #[serde(default)]
    pub max_consumed_capacity: f64,

    /// Minimum spacing between scan requests in milliseconds
    #[serde(default = "default_scan_interval_ms")]
    pub scan_interval_ms: u64,

    /// Scan and serialize without uploading
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            max_consumed_capacity: 0.0,
            scan_interval_ms: default_scan_interval_ms(),
            dry_run: false,
        }
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_consumed_capacity == 0.0 {
            return Err(
                "export.max_consumed_capacity is required (set MAX_CAPACITY)".to_string(),
            );
        }
        if !self.max_consumed_capacity.is_finite() || self.max_consumed_capacity < 0.0 {
            return Err(format!(
                "export.max_consumed_capacity must be a positive number, got {}",
                self.max_consumed_capacity
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_scan_interval_ms() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}
