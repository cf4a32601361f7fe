//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction and sliding TTL expiration.

mod clock;
mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use lru::{LruTracker, OldestFirst};
pub use stats::CacheStats;
pub use store::LruCache;
