//! Core business logic for the backup job.
//!
//! # Modules
//!
//! - [`scan`] - Adaptive, paced table scanning
//! - [`serialize`] - Row serialization in the Data Pipeline format
//! - [`export`] - Orchestration, manifest, summary
//! - [`events`] - Progress events and observers
//!
//! # Export Workflow
//!
//! 1. **Scan**: fetch one page per tick, resizing each request from the
//!    consumed capacity the previous one reported
//! 2. **Serialize**: append each row as one line to the in-memory buffer
//! 3. **Upload data**: `table/timestamp/<run id>`
//! 4. **Upload manifest**: `table/timestamp/manifest`
//! 5. **Upload marker**: `table/timestamp/_SUCCESS`
//!
//! # Example
//!
//! ```rust,no_run
//! use ddb_backup::config::load_config;
//! use ddb_backup::core::export::BackupCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None)?;
//! let mut coordinator = BackupCoordinator::from_config(&config).await?;
//! let summary = coordinator.execute().await?;
//!
//! println!("Rows: {}", summary.rows);
//! # Ok(())
//! # }
//! ```

pub mod events;
pub mod export;
pub mod scan;
pub mod serialize;
