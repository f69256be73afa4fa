//! Export summary and reporting

use sha2::{Digest, Sha256};
use std::time::Duration;

/// Summary of a completed export
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Run id, also the data object's name
    pub run_id: String,

    /// Shared timestamp path component
    pub timestamp: String,

    /// Number of scan requests issued
    pub iterations: u64,

    /// Number of rows written to the data object
    pub rows: u64,

    /// Size of the data object in bytes
    pub data_bytes: usize,

    /// Page limit the controller settled on
    pub final_page_limit: i32,

    /// Hex SHA-256 of the data object
    pub data_checksum: String,

    /// Keys written, in upload order
    pub objects_written: Vec<String>,

    /// Whether uploads were skipped
    pub dry_run: bool,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportSummary {
    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check that the data, manifest and marker objects were all written
    pub fn is_complete(&self) -> bool {
        self.objects_written.len() == 3
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            timestamp = %self.timestamp,
            iterations = self.iterations,
            rows = self.rows,
            data_bytes = self.data_bytes,
            final_page_limit = self.final_page_limit,
            data_checksum = %self.data_checksum,
            objects_written = self.objects_written.len(),
            dry_run = self.dry_run,
            duration_secs = self.duration.as_secs_f64(),
            "Export summary"
        );
    }
}

/// Hex-encoded SHA-256 of `data`
pub fn data_checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
