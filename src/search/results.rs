//! Search Result Cache
//!
//! Owns an [`LruCache`] of result pages keyed by [`SearchQuery::cache_key`].

use tracing::debug;

use crate::cache::{CacheStats, Clock, LruCache, SystemClock};
use crate::search::{
    NoteSummary, PageResult, SearchQuery, SEARCH_CACHE_MAX_SIZE, SEARCH_CACHE_TTL_MS,
};

type Page = PageResult<NoteSummary>;

// == Search Result Cache ==
/// Memoized note search pages.
///
/// Any create, update or delete of notes, notebooks or tags can change any
/// page, so mutations call [`invalidate_all`](Self::invalidate_all).
#[derive(Debug)]
pub struct SearchResultCache<C = SystemClock> {
    pages: LruCache<String, Page, C>,
}

impl SearchResultCache<SystemClock> {
    /// # Panics
    /// Panics if `max_size` is 0.
    pub fn new(max_size: usize, ttl_ms: u64) -> Self {
        Self {
            pages: LruCache::new(max_size, ttl_ms),
        }
    }
}

impl Default for SearchResultCache<SystemClock> {
    fn default() -> Self {
        Self::new(SEARCH_CACHE_MAX_SIZE, SEARCH_CACHE_TTL_MS)
    }
}

impl<C: Clock> SearchResultCache<C> {
    /// # Panics
    /// Panics if `max_size` is 0.
    pub fn with_clock(max_size: usize, ttl_ms: u64, clock: C) -> Self {
        Self {
            pages: LruCache::with_clock(max_size, ttl_ms, clock),
        }
    }

    // == Lookup ==
    /// Returns the cached page for `query`, refreshing its recency.
    pub fn lookup(&mut self, query: &SearchQuery) -> Option<Page> {
        self.pages.get(&query.cache_key()).cloned()
    }

    // == Store ==
    pub fn store(&mut self, query: &SearchQuery, page: Page) {
        self.pages.set(query.cache_key(), page);
    }

    // == Get Or Fetch ==
    /// Returns the cached page, or runs `fetch` and caches what it returns.
    ///
    /// Errors from `fetch` are passed through and nothing is cached.
    pub fn get_or_fetch<E, F>(&mut self, query: &SearchQuery, fetch: F) -> Result<Page, E>
    where
        F: FnOnce(&SearchQuery) -> Result<Page, E>,
    {
        let key = query.cache_key();
        if let Some(page) = self.pages.get(&key) {
            return Ok(page.clone());
        }

        let page = fetch(query)?;
        self.pages.set(key, page.clone());
        Ok(page)
    }

    // == Invalidate ==
    /// Drops the cached page for one query. Returns whether one was cached.
    pub fn invalidate(&mut self, query: &SearchQuery) -> bool {
        self.pages.delete(&query.cache_key())
    }

    /// Drops every cached page.
    pub fn invalidate_all(&mut self) {
        let dropped = self.pages.size();
        self.pages.clear();
        debug!(dropped, "search result cache invalidated");
    }

    // == Maintenance ==
    /// Purges stale pages. Returns how many were removed.
    pub fn cleanup(&mut self) -> usize {
        self.pages.cleanup()
    }

    pub fn len(&self) -> usize {
        self.pages.size()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.pages.stats()
    }
}
