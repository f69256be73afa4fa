//! Backup coordinator - main orchestrator for the export process
//!
//! The coordinator owns the [`BackupJob`] and moves it through three
//! phases:
//!
//! 1. **Scanning**: one paced scan request per tick until the table returns
//!    no further cursor, appending each serialized row to the job buffer
//! 2. **Uploading**: data object, then manifest, then the `_SUCCESS` marker
//! 3. **Done**
//!
//! Any error moves the job to **Failed** and is returned to the caller.
//! Nothing is retried and objects already written are left in place; the
//! marker is written last so a prefix without `_SUCCESS` is never mistaken
//! for a complete backup.

use crate::adapters::aws::load_sdk_config;
use crate::adapters::dynamodb::DynamoDbSource;
use crate::adapters::s3::S3ObjectStore;
use crate::adapters::traits::{ObjectStore, TableSource};
use crate::config::schema::ExportConfig;
use crate::config::BackupConfig;
use crate::core::events::{ExportEvent, ExportObserver, TracingObserver};
use crate::core::export::manifest::Manifest;
use crate::core::export::pacer::Pacer;
use crate::core::export::summary::{data_checksum, ExportSummary};
use crate::core::scan::AdaptiveScanner;
use crate::core::serialize::serialize_row;
use crate::domain::{BackupError, BackupJob, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Phase of a backup run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    /// Created, not yet executed
    Pending,
    Scanning,
    Uploading,
    /// All objects written (or uploads skipped in dry-run mode)
    Done,
    Failed,
}

impl ExportState {
    /// Whether the run has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExportState::Done | ExportState::Failed)
    }
}

/// Runtime options for the export loop
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Minimum spacing between scan requests; zero disables pacing
    pub scan_interval: Duration,

    /// Scan and serialize, but write nothing
    pub dry_run: bool,

    /// Abort the scan after this many requests
    pub max_iterations: Option<u64>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scan_interval: Duration::from_secs(1),
            dry_run: false,
            max_iterations: None,
        }
    }
}

impl ExportOptions {
    /// Build options from the `[export]` configuration section
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            scan_interval: Duration::from_millis(config.scan_interval_ms),
            dry_run: config.dry_run,
            max_iterations: None,
        }
    }
}

/// Backup coordinator
pub struct BackupCoordinator {
    job: BackupJob,
    scanner: AdaptiveScanner,
    store: Arc<dyn ObjectStore>,
    observer: Arc<dyn ExportObserver>,
    options: ExportOptions,
    state: ExportState,
    objects_written: Vec<String>,
}

impl BackupCoordinator {
    /// Create a coordinator over explicit collaborators
    pub fn new(
        job: BackupJob,
        source: Arc<dyn TableSource>,
        store: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            job,
            scanner: AdaptiveScanner::new(source),
            store,
            observer: Arc::new(TracingObserver),
            options: ExportOptions::default(),
            state: ExportState::Pending,
            objects_written: Vec::new(),
        }
    }

    /// Create a coordinator backed by DynamoDB and S3
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the job settings are invalid.
    pub async fn from_config(config: &BackupConfig) -> Result<Self> {
        let job = BackupJob::new(
            &config.table.name,
            &config.output.bucket,
            config.export.max_consumed_capacity,
        )?;

        let endpoint_url = config.table.endpoint_url.as_deref();
        let sdk_config = load_sdk_config(&config.table.region, endpoint_url).await;
        let source = Arc::new(DynamoDbSource::new(&sdk_config));
        let store = Arc::new(S3ObjectStore::new(&sdk_config, endpoint_url.is_some()));

        tracing::debug!(
            table = %config.table.name,
            region = %config.table.region,
            bucket = %config.output.bucket,
            "Created DynamoDB source and S3 object store"
        );

        Ok(Self::new(job, source, store).with_options(ExportOptions::from_config(&config.export)))
    }

    /// Replace the export options
    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the progress observer
    pub fn with_observer(mut self, observer: Arc<dyn ExportObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The job being exported
    pub fn job(&self) -> &BackupJob {
        &self.job
    }

    pub fn state(&self) -> ExportState {
        self.state
    }

    /// Execute the export
    ///
    /// # Errors
    ///
    /// Returns the first scan, serialization or upload error. A coordinator
    /// runs once; calling this again after it finished is an export error.
    pub async fn execute(&mut self) -> Result<ExportSummary> {
        if self.state.is_terminal() {
            return Err(BackupError::Export(format!(
                "backup run {} has already finished",
                self.job.run_id()
            )));
        }

        let start_time = Instant::now();
        tracing::info!(
            table = %self.job.table_name(),
            bucket = %self.job.output_bucket(),
            run_id = %self.job.run_id(),
            timestamp = %self.job.timestamp(),
            dry_run = self.options.dry_run,
            "Executing backup process"
        );

        match self.run().await {
            Ok(summary) => {
                self.state = ExportState::Done;
                let summary = summary.with_duration(start_time.elapsed());
                summary.log_summary();
                Ok(summary)
            }
            Err(e) => {
                tracing::error!(
                    run_id = %self.job.run_id(),
                    phase = ?self.state,
                    error = %e,
                    "Backup failed"
                );
                self.state = ExportState::Failed;
                Err(e)
            }
        }
    }

    async fn run(&mut self) -> Result<ExportSummary> {
        self.scan_table().await?;

        let data_bytes = self.job.buffer().len();
        let checksum = data_checksum(self.job.buffer());

        if self.options.dry_run {
            tracing::info!(
                rows = self.job.row_count(),
                data_bytes = data_bytes,
                "Dry run - skipping uploads"
            );
        } else {
            self.state = ExportState::Uploading;
            self.upload_objects().await?;
        }

        self.observer.on_event(&ExportEvent::ExportCompleted {
            rows: self.job.row_count(),
            dry_run: self.options.dry_run,
        });

        Ok(ExportSummary {
            run_id: self.job.run_id().to_string(),
            timestamp: self.job.timestamp().to_string(),
            iterations: self.job.iteration_count(),
            rows: self.job.row_count(),
            data_bytes,
            final_page_limit: self.job.page_limit(),
            data_checksum: checksum,
            objects_written: self.objects_written.clone(),
            dry_run: self.options.dry_run,
            duration: Duration::ZERO,
        })
    }

    async fn scan_table(&mut self) -> Result<()> {
        self.state = ExportState::Scanning;
        self.observer.on_event(&ExportEvent::ScanStarted {
            table_name: self.job.table_name().to_string(),
            run_id: self.job.run_id().to_string(),
        });

        let mut pacer = Pacer::new(self.options.scan_interval);

        loop {
            if let Some(max) = self.options.max_iterations {
                if self.job.iteration_count() >= max {
                    return Err(BackupError::Export(format!(
                        "scan of {} did not finish within {max} requests",
                        self.job.table_name()
                    )));
                }
            }

            pacer.wait().await;
            self.job.record_iteration();

            let page = self
                .scanner
                .fetch_page(&mut self.job, self.observer.as_ref())
                .await?;

            for row in &page.rows {
                let line = serialize_row(row)?;
                self.job.append_row(&line);
            }

            if self.job.cursor().is_none() {
                break;
            }
        }

        self.observer.on_event(&ExportEvent::ScanCompleted {
            iterations: self.job.iteration_count(),
            rows: self.job.row_count(),
        });

        Ok(())
    }

    async fn upload_objects(&mut self) -> Result<()> {
        let data = self.job.take_buffer();
        self.upload(self.job.data_key(), data).await?;

        let manifest = Manifest::for_job(&self.job).to_json()?;
        self.upload(self.job.manifest_key(), manifest).await?;

        self.upload(self.job.success_key(), Vec::new()).await?;

        Ok(())
    }

    async fn upload(&mut self, key: String, body: Vec<u8>) -> Result<()> {
        self.observer.on_event(&ExportEvent::UploadStarted {
            key: key.clone(),
            size_bytes: body.len(),
        });

        let location = self
            .store
            .put_object(self.job.output_bucket(), &key, body)
            .await?;

        self.observer.on_event(&ExportEvent::Uploaded {
            key: key.clone(),
            location,
        });
        self.objects_written.push(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_options_from_config() {
        let config = ExportConfig {
            max_consumed_capacity: 5.0,
            scan_interval_ms: 250,
            dry_run: true,
        };
        let options = ExportOptions::from_config(&config);
        assert_eq!(options.scan_interval, Duration::from_millis(250));
        assert!(options.dry_run);
        assert!(options.max_iterations.is_none());
    }

    #[test]
    fn test_terminal_states() {
        assert!(ExportState::Done.is_terminal());
        assert!(ExportState::Failed.is_terminal());
        assert!(!ExportState::Scanning.is_terminal());
        assert!(!ExportState::Pending.is_terminal());
    }
}
