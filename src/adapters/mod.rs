//! External integrations
//!
//! - [`aws`] - Shared SDK configuration
//! - [`traits`] - Seams between the export core and remote services
//! - [`dynamodb`] - Source table reads
//! - [`s3`] - Output bucket writes

pub mod aws;
pub mod dynamodb;
pub mod s3;
pub mod traits;

pub use traits::{ObjectStore, ScanPage, ScanRequest, TableSource};
