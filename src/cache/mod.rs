//! Cache Module
//!
//! Read-through caching with per-value TTL expiration and LRU eviction.

mod capability;
mod entry;
mod events;
mod keyed;
mod lru;
mod store;


// Re-export public types
pub use capability::{CacheKey, Cacheable, Loader};
pub use entry::{CacheEntry, Freshness};
pub use events::{CacheListener, LoadOutcome, MissReason, RemovalCause};
pub use keyed::KeyedCache;
pub use lru::LruTracker;
pub use store::EntryStore;
