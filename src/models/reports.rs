//! Report DTOs
//!
//! Defines the JSON structure of each line the lookup tool prints.

use serde::Serialize;

/// Result of resolving one key through the cache.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    /// The requested key
    pub key: String,
    /// Whether the loader (or cache) produced a value
    pub found: bool,
    /// Size of the value in bytes, when found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Loader failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupReport {
    /// Creates a report for a key that resolved to a value
    pub fn found(key: impl Into<String>, bytes: usize) -> Self {
        Self {
            key: key.into(),
            found: true,
            bytes: Some(bytes),
            error: None,
        }
    }

    /// Creates a report for a key the loader has no value for
    pub fn absent(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            found: false,
            bytes: None,
            error: None,
        }
    }

    /// Creates a report for a key whose load failed
    pub fn failed(key: impl Into<String>, error: impl ToString) -> Self {
        Self {
            key: key.into(),
            found: false,
            bytes: None,
            error: Some(error.to_string()),
        }
    }
}

/// Totals printed once all input has been processed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryReport {
    /// Number of keys looked up
    pub lookups: u64,
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that went to the loader
    pub misses: u64,
    /// Loads that produced a value
    pub loads: u64,
    /// Loads that found nothing
    pub absent: u64,
    /// Loads that failed
    pub failures: u64,
    /// Entries evicted for capacity
    pub evictions: u64,
    /// Entries held when input ended
    pub entries: usize,
}

impl SummaryReport {
    /// Fraction of lookups served from the cache.
    ///
    /// Returns hits / lookups, or 0.0 if nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups as f64
        }
    }
}
