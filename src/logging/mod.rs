//! Logging and observability
//!
//! Structured logging through `tracing`. Library code never prints; export
//! progress reaches the log through
//! [`crate::core::events::TracingObserver`].

pub mod structured;

pub use structured::init_logging;
