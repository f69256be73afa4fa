//! Export orchestration
//!
//! This module provides the export pipeline, including:
//! - Coordination of scanning and uploads
//! - Manifest construction
//! - Request pacing
//! - Summary and reporting

pub mod coordinator;
pub mod manifest;
pub mod pacer;
pub mod summary;

pub use coordinator::{BackupCoordinator, ExportOptions, ExportState};
pub use manifest::{Manifest, ManifestEntry};
pub use summary::ExportSummary;
