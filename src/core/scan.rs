//! Adaptive table scanning
//!
//! Each call to [`AdaptiveScanner::fetch_page`] issues one strongly
//! consistent `Scan` and then resizes the next request so its cost moves
//! toward the job's capacity ceiling. Cost scales roughly linearly with the
//! number of items evaluated, so the new limit is the old one scaled by
//! `ceiling / cost`. This is feedback, not a guarantee: a single page can
//! still overshoot when items get larger between pages.

use crate::adapters::traits::{ScanPage, ScanRequest, TableSource};
use crate::core::events::{ExportEvent, ExportObserver};
use crate::domain::{BackupJob, Result};
use std::sync::Arc;

/// Page limit the controller would choose before clamping
///
/// `floor(current * max_capacity / consumed)`, saturating at the bounds of
/// `i64`. A NaN ratio yields 0.
pub fn compute_page_limit(current: i32, max_capacity: f64, consumed: f64) -> i64 {
    let ratio = max_capacity / consumed;
    (f64::from(current) * ratio).floor() as i64
}

/// Next page limit: [`compute_page_limit`] clamped to `1..=i32::MAX`
///
/// # Examples
///
/// ```
/// use ddb_backup::core::scan::update_limit;
///
/// assert_eq!(update_limit(10, 5.0, 50.0), 1);
/// assert_eq!(update_limit(10, 5.0, 2.5), 20);
/// ```
pub fn update_limit(current: i32, max_capacity: f64, consumed: f64) -> i32 {
    clamp_limit(compute_page_limit(current, max_capacity, consumed))
}

fn clamp_limit(computed: i64) -> i32 {
    computed.clamp(1, i64::from(i32::MAX)) as i32
}

/// Scanner that tracks the cursor and page size on a [`BackupJob`]
pub struct AdaptiveScanner {
    source: Arc<dyn TableSource>,
}

impl AdaptiveScanner {
    /// Create a scanner over the given source
    pub fn new(source: Arc<dyn TableSource>) -> Self {
        Self { source }
    }

    /// Build the request for the job's next page
    pub fn build_request(job: &BackupJob) -> ScanRequest {
        ScanRequest {
            table_name: job.table_name().to_string(),
            consistent_read: true,
            limit: job.page_limit(),
            exclusive_start_key: job.cursor().cloned(),
        }
    }

    /// Fetch the job's next page
    ///
    /// On success the job's page limit is recomputed from the reported cost
    /// and its cursor is replaced by the page's next cursor. On failure the
    /// job is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates the source's scan error without retrying.
    pub async fn fetch_page(
        &self,
        job: &mut BackupJob,
        observer: &dyn ExportObserver,
    ) -> Result<ScanPage> {
        let request = Self::build_request(job);
        let page = self.source.scan_page(request).await?;

        let previous_limit = job.page_limit();
        let computed = compute_page_limit(
            previous_limit,
            job.max_consumed_capacity(),
            page.consumed_capacity_units,
        );
        if computed < 1 {
            observer.on_event(&ExportEvent::PageLimitClamped { computed });
        }
        job.set_page_limit(clamp_limit(computed));
        job.set_cursor(page.next_cursor.clone());

        observer.on_event(&ExportEvent::PageScanned {
            iteration: job.iteration_count(),
            rows: page.rows.len(),
            consumed_capacity: page.consumed_capacity_units,
            page_limit: previous_limit,
            next_page_limit: job.page_limit(),
            has_more: job.cursor().is_some(),
        });

        Ok(page)
    }
}
