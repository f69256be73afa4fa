//! Progress events emitted during an export
//!
//! The coordinator reports progress through an [`ExportObserver`] handed in
//! by the caller. [`TracingObserver`] turns events into structured log
//! records and is the default.

/// A progress event
#[derive(Debug, Clone, PartialEq)]
pub enum ExportEvent {
    /// The scan loop is starting
    ScanStarted { table_name: String, run_id: String },

    /// One page was fetched and its rows appended to the buffer
    PageScanned {
        iteration: u64,
        rows: usize,
        consumed_capacity: f64,
        page_limit: i32,
        next_page_limit: i32,
        has_more: bool,
    },

    /// The computed page limit fell below 1 and was raised to 1
    PageLimitClamped { computed: i64 },

    /// The table has been fully scanned
    ScanCompleted { iterations: u64, rows: u64 },

    /// An object write is about to be issued
    UploadStarted { key: String, size_bytes: usize },

    /// An object write succeeded
    Uploaded { key: String, location: String },

    /// All objects were written (or skipped in dry-run mode)
    ExportCompleted { rows: u64, dry_run: bool },
}

/// Receiver of [`ExportEvent`]s
pub trait ExportObserver: Send + Sync {
    fn on_event(&self, event: &ExportEvent);
}

/// Observer that logs every event through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ExportObserver for TracingObserver {
    fn on_event(&self, event: &ExportEvent) {
        match event {
            ExportEvent::ScanStarted { table_name, run_id } => {
                tracing::info!(table = %table_name, run_id = %run_id, "Starting table scan");
            }
            ExportEvent::PageScanned {
                iteration,
                rows,
                consumed_capacity,
                page_limit,
                next_page_limit,
                has_more,
            } => {
                tracing::debug!(
                    iteration = iteration,
                    rows = rows,
                    consumed_capacity = consumed_capacity,
                    page_limit = page_limit,
                    next_page_limit = next_page_limit,
                    has_more = has_more,
                    "Scanned page"
                );
            }
            ExportEvent::PageLimitClamped { computed } => {
                tracing::debug!(computed = computed, "Page limit below 1, clamping to 1");
            }
            ExportEvent::ScanCompleted { iterations, rows } => {
                tracing::info!(
                    iterations = iterations,
                    rows = rows,
                    "Gathered {} rows over {} iterations",
                    rows,
                    iterations
                );
            }
            ExportEvent::UploadStarted { key, size_bytes } => {
                tracing::info!(key = %key, size_bytes = size_bytes, "Uploading object");
            }
            ExportEvent::Uploaded { key, location } => {
                tracing::info!(key = %key, location = %location, "Uploaded object");
            }
            ExportEvent::ExportCompleted { rows, dry_run } => {
                tracing::info!(rows = rows, dry_run = dry_run, "Backup execution complete");
            }
        }
    }
}

/// Observer that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ExportObserver for NoopObserver {
    fn on_event(&self, _event: &ExportEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observers_accept_every_event() {
        let events = vec![
            ExportEvent::ScanStarted {
                table_name: "orders".to_string(),
                run_id: "run-1".to_string(),
            },
            ExportEvent::PageLimitClamped { computed: 0 },
            ExportEvent::ScanCompleted {
                iterations: 2,
                rows: 10,
            },
            ExportEvent::ExportCompleted {
                rows: 10,
                dry_run: false,
            },
        ];

        for event in &events {
            TracingObserver.on_event(event);
            NoopObserver.on_event(event);
        }
    }
}
