//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cleanup_handler, clear_handler, delete_handler, get_handler, has_handler, health_handler,
    set_handler, stats_handler, AppState,
};
use crate::cache::Clock;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /set` - Store a key-value pair
/// - `GET /get/:key` - Retrieve a value by key
/// - `GET /has/:key` - Check for a live key without touching it
/// - `DELETE /del/:key` - Delete a key
/// - `POST /clear` - Remove every entry
/// - `POST /cleanup` - Purge entries past their TTL
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: Clock + Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/set", put(set_handler::<C>))
        .route("/get/:key", get(get_handler::<C>))
        .route("/has/:key", get(has_handler::<C>))
        .route("/del/:key", delete(delete_handler::<C>))
        .route("/clear", post(clear_handler::<C>))
        .route("/cleanup", post(cleanup_handler::<C>))
        .route("/stats", get(stats_handler::<C>))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
