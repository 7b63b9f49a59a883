//! Keyed Cache - A bounded read-through cache
//!
//! Serves values from memory while they are fresh, reloads them from a
//! caller-supplied loader when they are missing or stale, and evicts the least
//! recently used entry once capacity is reached.

pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;

pub use cache::{CacheKey, CacheListener, Cacheable, KeyedCache, Loader};
pub use config::Config;
pub use error::{CacheError, Result};
pub use loader::{FileLoader, FileValue};
