//! In-memory collaborators shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use ddb_backup::adapters::traits::{ObjectStore, ScanPage, ScanRequest, TableSource};
use ddb_backup::core::events::{ExportEvent, ExportObserver};
use ddb_backup::domain::{AttributeValue, BackupError, BackupJob, Result, Row};
use std::collections::VecDeque;
use std::sync::Mutex;

pub const TABLE: &str = "orders";
pub const BUCKET: &str = "bucket";
pub const RUN_ID: &str = "run-0001";
pub const TIMESTAMP: &str = "2024-03-09-07-05-01";

/// Job with a fixed run id and start time
pub fn fixed_job(max_capacity: f64) -> BackupJob {
    let started_at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
    BackupJob::with_run_identity(TABLE, BUCKET, max_capacity, RUN_ID, started_at).unwrap()
}

/// Row with a single string attribute
pub fn row(key: &str, value: &str) -> Row {
    let mut row = Row::new();
    row.insert(key.to_string(), AttributeValue::S(value.to_string()));
    row
}

/// Page with the given rows, cost and optional cursor id
pub fn page(rows: Vec<Row>, cost: f64, cursor: Option<&str>) -> ScanPage {
    ScanPage {
        rows,
        consumed_capacity_units: cost,
        next_cursor: cursor.map(|id| row("id", id)),
    }
}

enum Script {
    Pages(VecDeque<Result<ScanPage>>),
    Endless(ScanPage),
}

/// Table source that replays scripted pages and records every request
pub struct ScriptedSource {
    script: Mutex<Script>,
    requests: Mutex<Vec<ScanRequest>>,
}

impl ScriptedSource {
    pub fn new(pages: Vec<ScanPage>) -> Self {
        Self::from_results(pages.into_iter().map(Ok).collect())
    }

    pub fn from_results(results: Vec<Result<ScanPage>>) -> Self {
        Self {
            script: Mutex::new(Script::Pages(results.into())),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns the same page, cursor included, forever
    pub fn endless(page: ScanPage) -> Self {
        Self {
            script: Mutex::new(Script::Endless(page)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ScanRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TableSource for ScriptedSource {
    async fn scan_page(&self, request: ScanRequest) -> Result<ScanPage> {
        self.requests.lock().unwrap().push(request);
        match &mut *self.script.lock().unwrap() {
            Script::Pages(pages) => pages
                .pop_front()
                .unwrap_or_else(|| Err(BackupError::Scan("script exhausted".to_string()))),
            Script::Endless(page) => Ok(page.clone()),
        }
    }
}

/// One attempted write
#[derive(Debug, Clone)]
pub struct PutRecord {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
}

/// Object store that keeps every write in memory
#[derive(Default)]
pub struct RecordingStore {
    attempts: Mutex<Vec<PutRecord>>,
    fail_suffix: Option<String>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any write whose key ends with `suffix`
    pub fn failing_on(suffix: &str) -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            fail_suffix: Some(suffix.to_string()),
        }
    }

    /// Every attempted write, including failed ones
    pub fn attempts(&self) -> Vec<PutRecord> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn attempted_keys(&self) -> Vec<String> {
        self.attempts().into_iter().map(|p| p.key).collect()
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<String> {
        self.attempts.lock().unwrap().push(PutRecord {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body,
        });

        if let Some(suffix) = &self.fail_suffix {
            if key.ends_with(suffix.as_str()) {
                return Err(BackupError::upload(key, "simulated write failure"));
            }
        }

        Ok(format!("s3://{bucket}/{key}"))
    }
}

/// Observer that keeps every event
#[derive(Default)]
pub struct CollectingObserver {
    events: Mutex<Vec<ExportEvent>>,
}

impl CollectingObserver {
    pub fn events(&self) -> Vec<ExportEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ExportObserver for CollectingObserver {
    fn on_event(&self, event: &ExportEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
