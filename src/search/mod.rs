//! Search Result Module
//!
//! Memoizes paginated note search results on top of [`LruCache`](crate::cache::LruCache).
//!
//! Keys are derived from the full set of search parameters, and the whole
//! cache is dropped whenever notes, notebooks or tags change.

mod page;
mod query;
mod results;

pub use page::{NoteSummary, PageResult};
pub use query::SearchQuery;
pub use results::SearchResultCache;

// == Public Constants ==
/// Default number of cached result pages
pub const SEARCH_CACHE_MAX_SIZE: usize = 200;

/// Default sliding TTL for cached result pages (milliseconds)
pub const SEARCH_CACHE_TTL_MS: u64 = 5_000;
