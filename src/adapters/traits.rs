//! Remote collaborator traits
//!
//! The export core talks to the source table and the output bucket only
//! through these traits. The AWS implementations live in
//! [`crate::adapters::dynamodb`] and [`crate::adapters::s3`].

use crate::domain::{Result, Row};
use async_trait::async_trait;

/// One scan request against the source table
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRequest {
    /// Table to scan
    pub table_name: String,

    /// Whether to request strongly consistent reads
    pub consistent_read: bool,

    /// Maximum number of items to evaluate
    pub limit: i32,

    /// Key to resume after, `None` for the first page
    pub exclusive_start_key: Option<Row>,
}

/// One page returned by the source table
#[derive(Debug, Clone, Default)]
pub struct ScanPage {
    /// Items in the order the table returned them
    pub rows: Vec<Row>,

    /// Capacity units the request consumed
    pub consumed_capacity_units: f64,

    /// Key to resume from, `None` once the table is exhausted
    pub next_cursor: Option<Row>,
}

/// Paginated read access to the source table
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Fetch one page
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::BackupError::Scan`] on transport failure.
    async fn scan_page(&self, request: ScanRequest) -> Result<ScanPage>;
}

/// Write access to the output bucket
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `body` to `bucket`/`key`, returning the object's location
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::BackupError::Upload`] if the write fails.
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<String>;
}
