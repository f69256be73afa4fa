//! CLI command implementations
//!
//! Exit codes: 0 success, 2 configuration error, 4 client setup error,
//! 5 export failure.

pub mod export;
pub mod validate;
