//! Export manifest
//!
//! The manifest is the descriptor bulk-load tooling reads to find the data
//! object. Its schema is fixed:
//!
//! ```json
//! {"name":"DynamoDB-export","version":3,"entries":[{"url":"s3://bucket/table/ts/run","mandatory":true}]}
//! ```

use crate::domain::{BackupJob, Result};
use serde::{Deserialize, Serialize};

/// Manifest name expected by import tooling
pub const MANIFEST_NAME: &str = "DynamoDB-export";

/// Manifest schema version
pub const MANIFEST_VERSION: u32 = 3;

/// Fixed-schema manifest record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: u32,
    pub entries: Vec<ManifestEntry>,
}

/// One data object referenced by the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub url: String,
    pub mandatory: bool,
}

impl Manifest {
    /// Build the manifest pointing at the job's data object
    ///
    /// # Examples
    ///
    /// ```
    /// use ddb_backup::core::export::manifest::Manifest;
    /// use ddb_backup::domain::BackupJob;
    ///
    /// let job = BackupJob::new("orders", "backups", 5.0).unwrap();
    /// let manifest = Manifest::for_job(&job);
    /// assert_eq!(manifest.entries.len(), 1);
    /// assert_eq!(manifest.entries[0].url, job.data_url());
    /// ```
    pub fn for_job(job: &BackupJob) -> Self {
        Self {
            name: MANIFEST_NAME.to_string(),
            version: MANIFEST_VERSION,
            entries: vec![ManifestEntry {
                url: job.data_url(),
                mandatory: true,
            }],
        }
    }

    /// Serialize to a compact JSON document
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_manifest_json_layout() {
        let started_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let job =
            BackupJob::with_run_identity("orders", "backups", 5.0, "run-1", started_at).unwrap();

        let json = String::from_utf8(Manifest::for_job(&job).to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"DynamoDB-export","version":3,"entries":[{"url":"s3://backups/orders/2024-01-02-03-04-05/run-1","mandatory":true}]}"#
        );
    }
}
