//! Cache Entry Module
//!
//! Defines individual cache entries and their per-value freshness.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cache::Cacheable;

// == Freshness ==
/// How long a stored value may be served without going back to the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Always stale; every lookup reloads
    Never,
    /// Fresh while less than this much time has elapsed since storage
    For(Duration),
    /// Fresh until evicted for capacity
    Forever,
}

impl Freshness {
    /// Maps a value's `cache_seconds` onto a freshness policy.
    pub fn from_cache_seconds(cache_seconds: i64) -> Self {
        match cache_seconds {
            s if s < 0 => Freshness::Forever,
            0 => Freshness::Never,
            s => Freshness::For(Duration::from_secs(s.unsigned_abs())),
        }
    }
}

// == Cache Entry ==
/// A stored value plus the instant it was stored.
///
/// Entries are never mutated: a refresh replaces the whole entry.
#[derive(Debug)]
pub struct CacheEntry<V> {
    value: Arc<V>,
    stored_at: Instant,
    freshness: Freshness,
}

// Manual impl so cloning only bumps the Arc and never requires `V: Clone`
impl<V> Clone for CacheEntry<V> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            stored_at: self.stored_at,
            freshness: self.freshness,
        }
    }
}

impl<V: Cacheable> CacheEntry<V> {
    // == Constructor ==
    /// Wraps a freshly loaded value, stamped with the current instant.
    ///
    /// `cache_seconds` is read here and nowhere else.
    pub fn new(value: V) -> Self {
        Self::with_timestamp(value, Instant::now())
    }

    /// Wraps a value as if it had been stored at `stored_at`.
    pub fn with_timestamp(value: V, stored_at: Instant) -> Self {
        let freshness = Freshness::from_cache_seconds(value.cache_seconds());
        Self {
            value: Arc::new(value),
            stored_at,
            freshness,
        }
    }
}

impl<V> CacheEntry<V> {
    // == Is Fresh ==
    /// Checks whether the entry may still be served at `now`.
    ///
    /// Boundary condition: once the full TTL has elapsed the entry is stale.
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        match self.freshness {
            Freshness::Forever => true,
            Freshness::Never => false,
            Freshness::For(ttl) => now.saturating_duration_since(self.stored_at) < ttl,
        }
    }

    /// Shared handle to the stored value.
    pub fn value(&self) -> &Arc<V> {
        &self.value
    }

    pub fn stored_at(&self) -> Instant {
        self.stored_at
    }

    pub fn freshness(&self) -> Freshness {
        self.freshness
    }
}
