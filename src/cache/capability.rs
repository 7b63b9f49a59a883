//! Cache Capabilities Module
//!
//! The three contracts the cache relies on: values that know how long they
//! stay fresh, keys that may project a simpler lookup key, and the loader
//! that is read through on a miss.

use std::fmt::Debug;
use std::hash::Hash;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

// == Cacheable ==
/// A value that can be stored in a [`KeyedCache`](super::KeyedCache).
///
/// `cache_seconds` is read once, when the value comes back from the loader:
/// - `> 0` - fresh for that many seconds after it was stored
/// - `0` - never fresh, every lookup goes back to the loader
/// - `< 0` - fresh until evicted for capacity
pub trait Cacheable {
    fn cache_seconds(&self) -> i64;
}

impl<T: Cacheable + ?Sized> Cacheable for Arc<T> {
    fn cache_seconds(&self) -> i64 {
        (**self).cache_seconds()
    }
}

impl<T: Cacheable + ?Sized> Cacheable for Box<T> {
    fn cache_seconds(&self) -> i64 {
        (**self).cache_seconds()
    }
}

impl<T: Cacheable + ?Sized> Cacheable for Rc<T> {
    fn cache_seconds(&self) -> i64 {
        (**self).cache_seconds()
    }
}

// == Cache Key ==
/// Projects a key onto the value used to index the cache store.
///
/// Keys whose identity is the key itself return a clone of `self`. Richer keys
/// return a simpler canonical representative, so that structurally equal key
/// instances share one cache slot. The loader always receives the original key.
pub trait CacheKey {
    /// Store index type, also used for recency ordering
    type Lookup: Hash + Eq + Clone + Debug;

    fn cache_key(&self) -> Self::Lookup;
}

/// Implements [`CacheKey`] with identity lookup for the listed types.
///
/// ```
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct AccountId(u64);
///
/// keyed_cache::identity_cache_key!(AccountId);
/// ```
#[macro_export]
macro_rules! identity_cache_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::cache::CacheKey for $ty {
                type Lookup = $ty;

                fn cache_key(&self) -> Self::Lookup {
                    ::std::clone::Clone::clone(self)
                }
            }
        )*
    };
}

identity_cache_key!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, String,
    Box<str>, Arc<str>, PathBuf,
);

impl<A: CacheKey, B: CacheKey> CacheKey for (A, B) {
    type Lookup = (A::Lookup, B::Lookup);

    fn cache_key(&self) -> Self::Lookup {
        (self.0.cache_key(), self.1.cache_key())
    }
}

impl<A: CacheKey, B: CacheKey, C: CacheKey> CacheKey for (A, B, C) {
    type Lookup = (A::Lookup, B::Lookup, C::Lookup);

    fn cache_key(&self) -> Self::Lookup {
        (self.0.cache_key(), self.1.cache_key(), self.2.cache_key())
    }
}

// == Loader ==
/// The backing source a [`KeyedCache`](super::KeyedCache) reads through to.
///
/// `Ok(None)` means the key does not exist; it is handed back to the caller
/// and never cached. Errors are returned to the caller of `get` unchanged.
pub trait Loader<K: ?Sized> {
    type Value: Cacheable;
    type Error;

    fn load(&self, key: &K) -> Result<Option<Self::Value>, Self::Error>;
}

impl<K, V, E, F> Loader<K> for F
where
    K: ?Sized,
    V: Cacheable,
    F: Fn(&K) -> Result<Option<V>, E>,
{
    type Value = V;
    type Error = E;

    fn load(&self, key: &K) -> Result<Option<V>, E> {
        self(key)
    }
}
