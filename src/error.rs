//! Error types for the keyed cache
//!
//! Provides unified error handling using thiserror. Only construction and
//! configuration can fail here: errors raised by a [`Loader`] keep their own
//! type and pass through the cache untouched.
//!
//! [`Loader`]: crate::cache::Loader

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The requested capacity cannot hold a single entry
    #[error("Invalid capacity: {0} (max size must be greater than zero)")]
    InvalidCapacity(usize),

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache construction.
pub type Result<T> = std::result::Result<T, CacheError>;
