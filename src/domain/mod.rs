//! Domain models and types for the backup job.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Attribute values** ([`AttributeValue`], [`Row`]) as read from the table
//! - **Job state** ([`BackupJob`]) for one export run
//! - **Error types** ([`BackupError`])
//! - **Result type alias** ([`Result`])

pub mod errors;
pub mod job;
pub mod result;
pub mod value;

pub use errors::BackupError;
pub use job::BackupJob;
pub use result::Result;
pub use value::{AttributeValue, Row};
