//! Cache Events Module
//!
//! Optional hook points fired by `KeyedCache` on hits, misses, loads and
//! removals. Listeners run outside the store lock.

// == Miss Reason ==
/// Why a lookup went to the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// No entry was stored under the key
    NotCached,
    /// An entry was stored but its TTL had elapsed
    Stale,
}

// == Load Outcome ==
/// What came back from the loader after a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A value was returned and stored
    Stored,
    /// The loader had no value; nothing was stored
    Absent,
    /// The loader failed; the error went back to the caller
    Failed,
}

// == Removal Cause ==
/// Why an entry left the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCause {
    /// Evicted for capacity while still fresh
    Evicted,
    /// Evicted for capacity after its TTL had already elapsed
    EvictedStale,
    /// Overwritten by a reload because its TTL had elapsed
    Expired,
    /// Overwritten while still fresh, by a concurrent reload of the same key
    Replaced,
}

impl RemovalCause {
    /// True for removals caused by the capacity bound.
    pub fn is_eviction(self) -> bool {
        matches!(self, RemovalCause::Evicted | RemovalCause::EvictedStale)
    }
}

// == Cache Listener ==
/// Receives cache events keyed by the store lookup key.
///
/// All methods default to doing nothing.
pub trait CacheListener<Q>: Send + Sync {
    fn on_hit(&self, _key: &Q) {}

    fn on_miss(&self, _key: &Q, _reason: MissReason) {}

    fn on_load(&self, _key: &Q, _outcome: LoadOutcome) {}

    fn on_removal(&self, _key: &Q, _cause: RemovalCause) {}
}
