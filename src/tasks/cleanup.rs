//! TTL Cleanup Task
//!
//! Background task that periodically sweeps stale cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::SharedCache;
use crate::cache::Clock;

/// Spawns a background task that periodically runs [`LruCache::cleanup`].
///
/// Lazy expiry only purges entries that get read again; this sweep bounds
/// memory held by entries written once and never read.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let state = AppState::new(LruCache::new(200, 5_000));
/// let cleanup_handle = spawn_cleanup_task(state.cache.clone(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
///
/// [`LruCache::cleanup`]: crate::cache::LruCache::cleanup
pub fn spawn_cleanup_task<C>(cache: SharedCache<C>, cleanup_interval_secs: u64) -> JoinHandle<()>
where
    C: Clock + Send + Sync + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup()
            };

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AppState;
    use crate::cache::{LruCache, ManualClock};
    use std::time::Duration;

    fn manual_shared(ttl_ms: u64) -> (SharedCache<ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let state = AppState::new(LruCache::with_clock(100, ttl_ms, clock.clone()));
        (state.cache, clock)
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let (cache, clock) = manual_shared(1_000);

        cache
            .write()
            .await
            .set("expire_soon".to_string(), "value".to_string());
        clock.advance(5_000);

        let handle = spawn_cleanup_task(cache.clone(), 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        // Swept without anyone reading it
        assert_eq!(cache.read().await.size(), 0);
        assert_eq!(cache.read().await.stats().expirations, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let (cache, clock) = manual_shared(1_000);

        cache
            .write()
            .await
            .set("long_lived".to_string(), "value".to_string());
        clock.advance(500);

        let handle = spawn_cleanup_task(cache.clone(), 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut cache_guard = cache.write().await;
            assert_eq!(
                cache_guard.get(&"long_lived".to_string()),
                Some(&"value".to_string())
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let (cache, _) = manual_shared(1_000);

        let handle = spawn_cleanup_task(cache, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
