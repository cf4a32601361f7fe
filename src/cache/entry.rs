//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with sliding TTL support.

// == Cache Entry ==
/// A stored value stamped with its last insertion or access time.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Last insertion or successful access (milliseconds)
    pub timestamp: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped at `now`.
    pub fn new(value: V, now: u64) -> Self {
        Self {
            value,
            timestamp: now,
        }
    }

    // == Touch ==
    /// Restarts the entry's TTL window at `now`.
    pub fn touch(&mut self, now: u64) {
        self.timestamp = now;
    }

    // == Is Expired ==
    /// Checks if the entry has gone unaccessed for longer than `ttl_ms`.
    ///
    /// Boundary condition: an entry is expired only when strictly more than
    /// `ttl_ms` has elapsed, so an entry read exactly `ttl_ms` after its last
    /// access is still live. A `ttl_ms` of 0 never expires. A clock reading
    /// earlier than the timestamp counts as zero elapsed time.
    pub fn is_expired(&self, now: u64, ttl_ms: u64) -> bool {
        ttl_ms > 0 && self.idle_ms(now) > ttl_ms
    }

    // == Idle Time ==
    /// Returns milliseconds since the last insertion or access.
    pub fn idle_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.timestamp)
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None if expiry is disabled.
    ///
    /// # Returns
    /// - `Some(0)` if the TTL has elapsed
    /// - `Some(remaining_ms)` while the entry is live
    /// - `None` when `ttl_ms` is 0
    pub fn ttl_remaining_ms(&self, now: u64, ttl_ms: u64) -> Option<u64> {
        if ttl_ms == 0 {
            return None;
        }
        Some(ttl_ms.saturating_sub(self.idle_ms(now)))
    }
}
