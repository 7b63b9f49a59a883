//! Keyed Cache Module
//!
//! Read-through cache over a [`Loader`]. Lookups serve fresh entries from a
//! bounded LRU store; misses and stale entries are reloaded and stored.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tracing::{debug, trace};

use crate::cache::{
    CacheEntry, CacheKey, CacheListener, EntryStore, LoadOutcome, Loader, MissReason,
};
use crate::config::Config;
use crate::error::{CacheError, Result};

type Listener<Q> = Arc<dyn CacheListener<Q>>;

// == Keyed Cache ==
/// A bounded, time-aware read-through cache.
///
/// Values decide their own TTL through [`Cacheable`](crate::cache::Cacheable).
/// Keys are indexed by their [`CacheKey::cache_key`] projection, while the
/// loader always receives the original key.
///
/// Only map access is serialised. Loads run without holding the lock, so
/// concurrent misses on the same key may each call the loader; the last write
/// wins and every caller still receives a freshly loaded value.
pub struct KeyedCache<K, L>
where
    K: CacheKey,
    L: Loader<K>,
{
    store: Mutex<EntryStore<K::Lookup, L::Value>>,
    loader: L,
    listener: Option<Listener<K::Lookup>>,
    max_size: usize,
}

impl<K, L> KeyedCache<K, L>
where
    K: CacheKey,
    L: Loader<K>,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `max_size` entries.
    ///
    /// # Errors
    /// `CacheError::InvalidCapacity` if `max_size` is zero.
    pub fn new(max_size: usize, loader: L) -> Result<Self> {
        if max_size == 0 {
            return Err(CacheError::InvalidCapacity(max_size));
        }
        Ok(Self {
            store: Mutex::new(EntryStore::new(max_size)),
            loader,
            listener: None,
            max_size,
        })
    }

    /// Creates a cache sized from configuration.
    pub fn from_config(config: &Config, loader: L) -> Result<Self> {
        config.validate()?;
        Self::new(config.max_size, loader)
    }

    /// Attaches a listener for hit, miss, load and removal events.
    pub fn with_listener(mut self, listener: Arc<dyn CacheListener<K::Lookup>>) -> Self {
        self.listener = Some(listener);
        self
    }

    // == Get ==
    /// Returns the value for `key`, reading through to the loader when the
    /// key is not cached or its entry is no longer fresh.
    ///
    /// `Ok(None)` means the loader has no value for `key`; that answer is
    /// never cached. Loader errors are returned unchanged and leave the cache
    /// as it was.
    pub fn get(&self, key: &K) -> std::result::Result<Option<Arc<L::Value>>, L::Error> {
        let lookup = key.cache_key();
        // Taken before the load, so load latency counts against the new value's TTL
        let now = Instant::now();

        let cached = self.lock_store().lookup(&lookup);

        let reason = match cached {
            Some(entry) if entry.is_fresh_at(now) => {
                trace!(key = ?lookup, "Cache hit");
                self.notify(|listener| listener.on_hit(&lookup));
                return Ok(Some(Arc::clone(entry.value())));
            }
            Some(_) => {
                debug!(key = ?lookup, "Expired cache entry found");
                MissReason::Stale
            }
            None => MissReason::NotCached,
        };
        self.notify(|listener| listener.on_miss(&lookup, reason));

        let loaded = match self.loader.load(key) {
            Ok(loaded) => loaded,
            Err(err) => {
                self.notify(|listener| listener.on_load(&lookup, LoadOutcome::Failed));
                return Err(err);
            }
        };

        let Some(value) = loaded else {
            debug!(key = ?lookup, "Loader returned no value, nothing cached");
            self.notify(|listener| listener.on_load(&lookup, LoadOutcome::Absent));
            return Ok(None);
        };

        let entry = CacheEntry::with_timestamp(value, now);
        let value = Arc::clone(entry.value());
        let removed = self.lock_store().insert(lookup.clone(), entry, now);
        debug!(key = ?lookup, "Cache put");

        self.notify(|listener| listener.on_load(&lookup, LoadOutcome::Stored));
        for (removed_key, cause) in &removed {
            if cause.is_eviction() {
                debug!(key = ?removed_key, ?cause, "Evicted cache entry");
            }
            self.notify(|listener| listener.on_removal(removed_key, *cause));
        }

        Ok(Some(value))
    }

    // == Contains ==
    /// Checks whether `key` has an entry, fresh or not, without touching it.
    pub fn contains(&self, key: &K) -> bool {
        self.lock_store().contains(&key.cache_key())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.lock_store().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock_store().is_empty()
    }

    // == Max Size ==
    /// Returns the capacity fixed at construction.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    // == Loader ==
    /// Borrows the loader this cache reads through to.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    // == Keys By Recency ==
    /// Cached lookup keys from least to most recently used.
    pub fn keys_by_recency(&self) -> Vec<K::Lookup> {
        self.lock_store().keys_oldest_first()
    }

    // A panic while holding the lock can't leave the store half-updated:
    // the loader and listeners never run under it.
    fn lock_store(&self) -> MutexGuard<'_, EntryStore<K::Lookup, L::Value>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, event: impl FnOnce(&dyn CacheListener<K::Lookup>)) {
        if let Some(listener) = &self.listener {
            event(listener.as_ref());
        }
    }
}

impl<K, L> fmt::Debug for KeyedCache<K, L>
where
    K: CacheKey,
    L: Loader<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedCache")
            .field("len", &self.len())
            .field("max_size", &self.max_size)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
