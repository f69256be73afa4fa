//! S3 adapter for writing the backup objects

pub mod store;

pub use store::S3ObjectStore;
