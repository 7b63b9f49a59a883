//! Cache Store Module
//!
//! Bounded map of cache entries combining HashMap storage with LRU tracking.
//! The store itself is not synchronised; `KeyedCache` wraps it in a mutex.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

use crate::cache::{CacheEntry, LruTracker, RemovalCause};

// == Entry Store ==
/// Capacity-bounded entry storage with LRU eviction.
#[derive(Debug)]
pub struct EntryStore<Q, V> {
    /// Lookup key to entry
    entries: HashMap<Q, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker<Q>,
    /// Maximum number of entries allowed
    max_size: usize,
}

impl<Q: Hash + Eq + Clone, V> EntryStore<Q, V> {
    // == Constructor ==
    /// Creates an empty store holding at most `max_size` entries.
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            max_size,
        }
    }

    // == Lookup ==
    /// Returns a handle to the entry under `key`, marking it most recently used.
    ///
    /// Freshness is not checked here; stale entries are still touched.
    pub fn lookup(&mut self, key: &Q) -> Option<CacheEntry<V>> {
        let entry = self.entries.get(key)?.clone();
        self.lru.touch(key);
        Some(entry)
    }

    // == Insert ==
    /// Stores `entry` under `key`, overwriting any previous entry, then evicts
    /// least recently used entries until the store is back within capacity.
    ///
    /// Returns every entry that left the store, with the reason it left.
    /// Freshness of the departing entries is judged at `now`.
    pub fn insert(
        &mut self,
        key: Q,
        entry: CacheEntry<V>,
        now: Instant,
    ) -> Vec<(Q, RemovalCause)> {
        let mut removed = Vec::new();

        self.lru.touch(&key);
        if let Some(previous) = self.entries.insert(key.clone(), entry) {
            let cause = if previous.is_fresh_at(now) {
                RemovalCause::Replaced
            } else {
                RemovalCause::Expired
            };
            removed.push((key, cause));
        }

        while self.entries.len() > self.max_size {
            let Some(oldest) = self.lru.evict_oldest() else {
                break;
            };
            if let Some(evicted) = self.entries.remove(&oldest) {
                let cause = if evicted.is_fresh_at(now) {
                    RemovalCause::Evicted
                } else {
                    RemovalCause::EvictedStale
                };
                removed.push((oldest, cause));
            }
        }
        debug_assert_eq!(self.lru.len(), self.entries.len());

        removed
    }

    /// Checks for an entry without touching it or judging its freshness.
    pub fn contains(&self, key: &Q) -> bool {
        self.entries.contains_key(key)
    }

    /// Stored keys from least to most recently used.
    pub fn keys_oldest_first(&self) -> Vec<Q> {
        self.lru.iter_oldest_first().cloned().collect()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
