//! Note Cache - bounded LRU cache with sliding TTL expiry
//!
//! Memoizes paginated note search results, and serves a shared string cache
//! over HTTP with a periodic cleanup sweep.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod tasks;

pub use api::AppState;
pub use cache::LruCache;
pub use config::Config;
pub use search::{SearchQuery, SearchResultCache};
pub use tasks::spawn_cleanup_task;
