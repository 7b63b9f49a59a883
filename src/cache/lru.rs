//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Every touch stamps the key with a monotonically increasing tick:
/// - Lowest tick = Least recently used
/// - Highest tick = Most recently used
///
/// Touch and eviction are both logarithmic in the number of keys.
#[derive(Debug)]
pub struct LruTracker<Q> {
    /// Current tick for every tracked key
    ticks: HashMap<Q, u64>,
    /// Keys ordered by the tick of their last access
    order: BTreeMap<u64, Q>,
    next_tick: u64,
}

impl<Q> Default for LruTracker<Q> {
    fn default() -> Self {
        Self {
            ticks: HashMap::new(),
            order: BTreeMap::new(),
            next_tick: 0,
        }
    }
}

impl<Q: Hash + Eq + Clone> LruTracker<Q> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used.
    ///
    /// Existing keys are moved to the most recent position; new keys are added there.
    pub fn touch(&mut self, key: &Q) {
        let tick = self.next_tick;
        self.next_tick += 1;

        match self.ticks.get_mut(key) {
            Some(previous) => {
                self.order.remove(&*previous);
                *previous = tick;
            }
            None => {
                self.ticks.insert(key.clone(), tick);
            }
        }
        self.order.insert(tick, key.clone());
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<Q> {
        let (_, key) = self.order.pop_first()?;
        self.ticks.remove(&key);
        Some(key)
    }

    /// Tracked keys from least to most recently used.
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &Q> {
        self.order.values()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }
}
