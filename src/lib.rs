// ddb-backup - DynamoDB to S3 backup job
// Copyright (c) 2025 ddb-backup Contributors
// Licensed under the MIT License

//! # ddb-backup - DynamoDB table export to S3
//!
//! A short-lived job that performs a full export of one DynamoDB table
//! into an S3 bucket, in the line-oriented format AWS Data Pipeline import
//! tooling reads.
//!
//! ## Overview
//!
//! Each run:
//! - **Scans** the table with strongly consistent reads, one paced request
//!   per tick, resizing each request toward a consumed-capacity ceiling
//! - **Serializes** every item into one line of typed attribute tokens
//! - **Uploads** three objects under `table/timestamp/`: the data object
//!   (named after the run id), a `manifest`, and a zero-byte `_SUCCESS`
//!   marker written last
//!
//! A prefix without `_SUCCESS` is an incomplete backup and must be ignored.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Scanning, serialization, export orchestration
//! - [`adapters`] - DynamoDB and S3 integrations behind traits
//! - [`domain`] - Attribute values, job state, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ddb_backup::config::load_config;
//! use ddb_backup::core::export::BackupCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config(None)?;
//!     let mut coordinator = BackupCoordinator::from_config(&config).await?;
//!     let summary = coordinator.execute().await?;
//!
//!     println!("Exported {} rows", summary.rows);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`] with a
//! [`domain::BackupError`]. Nothing is retried; a failed run is abandoned
//! and the next scheduled run starts over.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
