//! Report models for the lookup tool
//!
//! JSON lines written to stdout by the `keyed_cache` binary.

pub mod reports;

// Re-export commonly used types
pub use reports::{LookupReport, SummaryReport};
