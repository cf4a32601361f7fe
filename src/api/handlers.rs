//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::{Clock, LruCache, SystemClock};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    DeleteResponse, GetResponse, HasResponse, HealthResponse, RemovedResponse, SetRequest,
    SetResponse, StatsResponse,
};

/// The cache behind the HTTP surface, shared by handlers and the cleanup task.
pub type SharedCache<C = SystemClock> = Arc<RwLock<LruCache<String, String, C>>>;

/// Application state shared across all handlers.
///
/// The cache assumes one caller at a time; the RwLock provides that for
/// concurrent requests.
#[derive(Clone)]
pub struct AppState<C = SystemClock> {
    pub cache: SharedCache<C>,
}

impl AppState<SystemClock> {
    /// Creates a new AppState from configuration.
    ///
    /// Call [`Config::validate`] first: a zero capacity panics here.
    pub fn from_config(config: &Config) -> Self {
        Self::new(LruCache::new(config.max_entries, config.ttl_ms))
    }
}

impl<C: Clock> AppState<C> {
    /// Creates a new AppState owning the given cache.
    pub fn new(cache: LruCache<String, String, C>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }
}

/// Handler for PUT /set
pub async fn set_handler<C: Clock>(
    State(state): State<AppState<C>>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    cache.set(req.key.clone(), req.value);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Takes the write lock: a hit refreshes recency and a stale hit is purged.
pub async fn get_handler<C: Clock>(
    State(state): State<AppState<C>>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let mut cache = state.cache.write().await;
    let value = cache
        .get(&key)
        .cloned()
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /has/:key
///
/// Read lock only; checking presence never changes eviction order.
pub async fn has_handler<C: Clock>(
    State(state): State<AppState<C>>,
    Path(key): Path<String>,
) -> Json<HasResponse> {
    let cache = state.cache.read().await;
    let present = cache.has(&key);

    Json(HasResponse::new(key, present))
}

/// Handler for DELETE /del/:key
pub async fn delete_handler<C: Clock>(
    State(state): State<AppState<C>>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let mut cache = state.cache.write().await;
    if !cache.delete(&key) {
        return Err(CacheError::NotFound(key));
    }

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for POST /clear
pub async fn clear_handler<C: Clock>(State(state): State<AppState<C>>) -> Json<RemovedResponse> {
    let mut cache = state.cache.write().await;
    let removed = cache.size();
    cache.clear();

    info!(removed, "Cache cleared");
    Json(RemovedResponse::new(removed))
}

/// Handler for POST /cleanup
///
/// Runs the same sweep as the background task, on demand.
pub async fn cleanup_handler<C: Clock>(
    State(state): State<AppState<C>>,
) -> Json<RemovedResponse> {
    let mut cache = state.cache.write().await;
    let removed = cache.cleanup();

    Json(RemovedResponse::new(removed))
}

/// Handler for GET /stats
pub async fn stats_handler<C: Clock>(State(state): State<AppState<C>>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;

    Json(StatsResponse::new(
        &cache.stats(),
        cache.max_size(),
        cache.ttl_ms(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
