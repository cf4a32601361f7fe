//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and sliding TTL expiry.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::{CacheEntry, CacheStats, Clock, LruTracker, SystemClock};

// == LRU Cache ==
/// Bounded cache with least-recently-used eviction and optional sliding TTL.
///
/// Every successful [`get`](Self::get) or [`set`](Self::set) moves the key to
/// the most-recently-used position and restarts its TTL window. Expired
/// entries are dropped lazily when `get` runs into them, or in bulk by
/// [`cleanup`](Self::cleanup). Until then they still occupy a slot, so
/// [`size`](Self::size) is an upper bound on live entries.
///
/// No operation fails: absence is reported as `None` or `false`.
///
/// # Example
/// ```
/// use note_cache::cache::LruCache;
///
/// let mut cache = LruCache::new(2, 0);
/// cache.set("a", 1);
/// cache.set("b", 2);
/// cache.get(&"a");
/// cache.set("c", 3); // evicts "b"
///
/// assert!(cache.has(&"a"));
/// assert!(!cache.has(&"b"));
/// ```
#[derive(Debug)]
pub struct LruCache<K, V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Recency order, least recently used first out
    lru: LruTracker<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Sliding TTL in milliseconds, 0 = never expire
    ttl_ms: u64,
    clock: C,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V, SystemClock> {
    // == Constructor ==
    /// Creates a cache reading time from the system clock.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries, must be positive
    /// * `ttl_ms` - Milliseconds an entry may sit unaccessed; 0 disables expiry
    ///
    /// # Panics
    /// Panics if `max_size` is 0.
    pub fn new(max_size: usize, ttl_ms: u64) -> Self {
        Self::with_clock(max_size, ttl_ms, SystemClock)
    }
}

impl<K: Hash + Eq + Clone, V, C: Clock> LruCache<K, V, C> {
    /// Creates a cache reading time from `clock`.
    ///
    /// # Panics
    /// Panics if `max_size` is 0.
    pub fn with_clock(max_size: usize, ttl_ms: u64, clock: C) -> Self {
        assert!(max_size > 0, "LruCache max_size must be greater than 0");
        Self {
            entries: HashMap::with_capacity(max_size),
            lru: LruTracker::with_capacity(max_size),
            stats: CacheStats::new(),
            max_size,
            ttl_ms,
            clock,
        }
    }

    // == Get ==
    /// Retrieves a value by key, refreshing its recency and TTL window.
    ///
    /// An entry found stale is removed and reported as absent.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let now = self.clock.now_ms();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now, self.ttl_ms),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return None;
        }

        self.lru.touch(key);
        self.stats.record_hit();

        let entry = self.entries.get_mut(key)?;
        entry.touch(now);
        Some(&entry.value)
    }

    // == Set ==
    /// Stores a value, making the key the most recently used.
    ///
    /// Overwriting an existing key never evicts. Inserting a new key into a
    /// full cache evicts the least recently used entry first, stale or not.
    pub fn set(&mut self, key: K, value: V) {
        let now = self.clock.now_ms();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_size {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        self.lru.touch(&key);
        self.entries.insert(key, CacheEntry::new(value, now));
    }

    // == Has ==
    /// Checks whether a live entry exists.
    ///
    /// Pure predicate: recency, timestamps and statistics are left untouched,
    /// and a stale entry is reported absent but not removed.
    pub fn has(&self, key: &K) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now, self.ttl_ms))
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether anything was removed.
    pub fn delete(&mut self, key: &K) -> bool {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
    }

    // == Cleanup ==
    /// Removes all entries idle for longer than the TTL.
    ///
    /// No-op when the TTL is disabled. Returns the number of entries removed.
    pub fn cleanup(&mut self) -> usize {
        if self.ttl_ms == 0 {
            return 0;
        }

        let now = self.clock.now_ms();
        let expired_keys: Vec<K> = self
            .lru
            .iter_oldest_first()
            .filter(|key| {
                self.entries
                    .get(*key)
                    .is_some_and(|entry| entry.is_expired(now, self.ttl_ms))
            })
            .cloned()
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.lru.remove(&key);
        }

        self.stats.record_expirations(count);
        count
    }

    // == Size ==
    /// Returns the number of stored entries, including stale ones not yet purged.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Stored keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.lru.iter_oldest_first()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}
