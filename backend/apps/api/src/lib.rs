//! API Router Assembly
//!
//! Composes the auth and timeline routers into one application.
//! Kept in the library so integration tests can drive the full
//! router without binding a socket.

use std::sync::Arc;
use std::time::Duration;

use auth::{AuthConfig, AuthMiddlewareState, SqliteAuthRepository, auth_router, require_bearer};
use axum::{Router, middleware};
use sqlx::SqlitePool;
use timeline::{SqliteTimelineRepository, timeline_router};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Per-request deadline
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the full application router
///
/// `/register/` and `/login/` are public; everything else sits behind
/// the bearer-token middleware.
pub fn app(pool: SqlitePool, config: AuthConfig) -> Router {
    let auth_repo = SqliteAuthRepository::new(pool.clone());
    let timeline_repo = SqliteTimelineRepository::new(pool);

    let middleware_state = AuthMiddlewareState {
        config: Arc::new(config.clone()),
    };

    let protected = timeline_router(timeline_repo).route_layer(middleware::from_fn_with_state(
        middleware_state,
        require_bearer,
    ));

    Router::new()
        .merge(auth_router(auth_repo, config))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}
