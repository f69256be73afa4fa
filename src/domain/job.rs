//! Backup job state
//!
//! A [`BackupJob`] is created once per invocation and owned by the export
//! coordinator. Its run id and timestamp are fixed at construction so every
//! object written by the run lands under the same prefix.

use super::errors::BackupError;
use super::result::Result;
use super::value::Row;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Layout of the timestamp path component, e.g. `2024-03-09-07-05-01`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Object name of the manifest under the run prefix
pub const MANIFEST_OBJECT: &str = "manifest";

/// Object name of the completion marker under the run prefix
pub const SUCCESS_OBJECT: &str = "_SUCCESS";

/// Formats a timestamp the way it appears in object keys
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// State of one backup run
#[derive(Debug, Clone)]
pub struct BackupJob {
    table_name: String,
    output_bucket: String,
    max_consumed_capacity: f64,

    run_id: String,
    timestamp: String,

    page_limit: i32,
    cursor: Option<Row>,
    buffer: Vec<u8>,

    iteration_count: u64,
    row_count: u64,
}

impl BackupJob {
    /// Creates a job with a fresh run id and the current time
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the table or bucket name is empty or
    /// the capacity ceiling is not a positive number.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddb_backup::domain::BackupJob;
    ///
    /// let job = BackupJob::new("orders", "backups", 5.0).unwrap();
    /// assert_eq!(job.page_limit(), 1);
    /// assert!(job.data_key().starts_with("orders/"));
    /// ```
    pub fn new(
        table_name: impl Into<String>,
        output_bucket: impl Into<String>,
        max_consumed_capacity: f64,
    ) -> Result<Self> {
        Self::with_run_identity(
            table_name,
            output_bucket,
            max_consumed_capacity,
            Uuid::new_v4().to_string(),
            Utc::now(),
        )
    }

    /// Creates a job with an explicit run id and start time
    pub fn with_run_identity(
        table_name: impl Into<String>,
        output_bucket: impl Into<String>,
        max_consumed_capacity: f64,
        run_id: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Result<Self> {
        let table_name = table_name.into();
        let output_bucket = output_bucket.into();
        let run_id = run_id.into();

        if table_name.trim().is_empty() {
            return Err(BackupError::Configuration(
                "table name cannot be empty".to_string(),
            ));
        }
        if output_bucket.trim().is_empty() {
            return Err(BackupError::Configuration(
                "output bucket cannot be empty".to_string(),
            ));
        }
        if !max_consumed_capacity.is_finite() || max_consumed_capacity <= 0.0 {
            return Err(BackupError::Configuration(format!(
                "max consumed capacity must be a positive number, got {max_consumed_capacity}"
            )));
        }
        if run_id.trim().is_empty() {
            return Err(BackupError::Configuration(
                "run id cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            table_name,
            output_bucket,
            max_consumed_capacity,
            run_id,
            timestamp: format_timestamp(started_at),
            page_limit: 1,
            cursor: None,
            buffer: Vec::new(),
            iteration_count: 0,
            row_count: 0,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn output_bucket(&self) -> &str {
        &self.output_bucket
    }

    pub fn max_consumed_capacity(&self) -> f64 {
        self.max_consumed_capacity
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Current requested page size, always at least 1
    pub fn page_limit(&self) -> i32 {
        self.page_limit
    }

    pub(crate) fn set_page_limit(&mut self, limit: i32) {
        self.page_limit = limit.max(1);
    }

    /// Exclusive start key for the next scan, `None` before the first page
    /// and once the table is exhausted
    pub fn cursor(&self) -> Option<&Row> {
        self.cursor.as_ref()
    }

    pub(crate) fn set_cursor(&mut self, cursor: Option<Row>) {
        self.cursor = cursor.filter(|key| !key.is_empty());
    }

    /// Serialized rows accumulated so far, newline-delimited
    ///
    /// Empty again once the data object has been handed to the uploader.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub(crate) fn take_buffer(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buffer)
    }

    pub(crate) fn append_row(&mut self, serialized: &[u8]) {
        self.buffer.extend_from_slice(serialized);
        self.buffer.push(b'\n');
        self.row_count += 1;
    }

    pub(crate) fn record_iteration(&mut self) {
        self.iteration_count += 1;
    }

    pub fn iteration_count(&self) -> u64 {
        self.iteration_count
    }

    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Object key under the run prefix, `{table}/{timestamp}/{name}`
    pub fn object_key(&self, name: &str) -> String {
        format!("{}/{}/{}", self.table_name, self.timestamp, name)
    }

    /// Key of the data object, named after the run id
    pub fn data_key(&self) -> String {
        self.object_key(&self.run_id)
    }

    pub fn manifest_key(&self) -> String {
        self.object_key(MANIFEST_OBJECT)
    }

    pub fn success_key(&self) -> String {
        self.object_key(SUCCESS_OBJECT)
    }

    /// Full `s3://` address of the data object
    pub fn data_url(&self) -> String {
        format!("s3://{}/{}", self.output_bucket, self.data_key())
    }
}
