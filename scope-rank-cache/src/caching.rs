//! Memoise a weigher behind a concurrent map.
//!
//! Weighers are pure, so a weight computed once for a `(selector, scope)`
//! pair can be reused for the lifetime of the process. The cache never
//! changes results; it only saves calls into the wrapped weigher.
//!
//! Concurrent misses on the same pair may both reach the wrapped weigher.
//! Both store the same weight, so the race is benign. Writes to a bounded
//! cache are serialised so the capacity holds under contention.

#![forbid(unsafe_code)]

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use dashmap::DashMap;
use log::debug;
use scope_rank_core::{Weigher, Weight};

use crate::{CacheConfig, CacheConfigError, CachePolicy};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    selector: Box<str>,
    scope: Box<str>,
}

impl CacheKey {
    fn new(selector: &str, scope: &str) -> Self {
        Self {
            selector: Box::from(selector),
            scope: Box::from(scope),
        }
    }
}

/// Counters describing how a [`CachingWeigher`] has been used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to consult the wrapped weigher.
    pub misses: u64,
    /// Times a full bounded cache was emptied to make room.
    pub flushes: u64,
    /// Weights currently retained.
    pub entries: usize,
}

impl CacheStats {
    /// Total number of lookups observed.
    #[must_use]
    pub const fn lookups(&self) -> u64 {
        self.hits.saturating_add(self.misses)
    }
}

/// A [`Weigher`] that memoises another weigher.
///
/// # Examples
///
/// ```
/// use scope_rank_cache::CachingWeigher;
/// use scope_rank_core::{TokenPrefixWeigher, Weigher};
///
/// let weigher = CachingWeigher::new(TokenPrefixWeigher);
/// let first = weigher.weigh("source.java", "source.java keyword");
/// let second = weigher.weigh("source.java", "source.java keyword");
/// assert_eq!(first, second);
///
/// let stats = weigher.stats();
/// assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));
/// ```
pub struct CachingWeigher<W> {
    inner: W,
    policy: CachePolicy,
    entries: DashMap<CacheKey, Weight>,
    // Held across the capacity check, flush and insert of a bounded cache.
    bounded_writes: Mutex<()>,
    hits: AtomicU64,
    misses: AtomicU64,
    flushes: AtomicU64,
}

impl<W: Weigher> CachingWeigher<W> {
    /// Wrap `inner` in an unbounded cache.
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self::with_policy(inner, CachePolicy::Unbounded)
    }

    /// Wrap `inner` in a cache configured by `config`.
    ///
    /// # Errors
    /// Returns [`CacheConfigError`] when the configuration fails
    /// [`CacheConfig::validate`].
    pub fn with_config(inner: W, config: CacheConfig) -> Result<Self, CacheConfigError> {
        let validated = config.validate()?;
        Ok(Self::with_policy(inner, validated.policy))
    }

    fn with_policy(inner: W, policy: CachePolicy) -> Self {
        Self {
            inner,
            policy,
            entries: DashMap::new(),
            bounded_writes: Mutex::new(()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            flushes: AtomicU64::new(0),
        }
    }

    /// The wrapped weigher.
    #[must_use]
    pub const fn inner(&self) -> &W {
        &self.inner
    }

    /// The retention policy in force.
    #[must_use]
    pub const fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Number of weights currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no weights are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every retained weight. Counters are left untouched.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Snapshot the usage counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            flushes: self.flushes.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }

    fn store(&self, key: CacheKey, weight: Weight) {
        let CachePolicy::Bounded { max_entries } = self.policy else {
            self.entries.insert(key, weight);
            return;
        };
        // The guard protects no data, so a poisoned lock is still usable.
        let _writer = self
            .bounded_writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.entries.len() >= max_entries && !self.entries.contains_key(&key) {
            debug!("flushing scope weight cache after reaching {max_entries} entries");
            self.entries.clear();
            self.flushes.fetch_add(1, Ordering::Relaxed);
        }
        self.entries.insert(key, weight);
    }
}

impl<W: Weigher> Weigher for CachingWeigher<W> {
    fn weigh(&self, selector: &str, scope: &str) -> Weight {
        let key = CacheKey::new(selector, scope);
        // Copy the weight out so the shard guard is released before the
        // wrapped weigher runs or the map is written.
        let cached = self.entries.get(&key).map(|entry| *entry.value());
        if let Some(weight) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return weight;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let weight = self.inner.weigh(selector, scope);
        self.store(key, weight);
        weight
    }
}

impl<W: fmt::Debug> fmt::Debug for CachingWeigher<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachingWeigher")
            .field("inner", &self.inner)
            .field("policy", &self.policy)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}
