//! DynamoDB adapter
//!
//! - [`source`] - `Scan` based [`crate::adapters::traits::TableSource`]
//! - [`convert`] - SDK value conversions

pub mod convert;
pub mod source;

pub use source::DynamoDbSource;
