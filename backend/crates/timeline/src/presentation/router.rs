//! Timeline Router
//!
//! Routes only; the bearer-token middleware is layered on by the
//! composing application so this crate stays independent of auth.

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::infra::sqlite::SqliteTimelineRepository;
use crate::presentation::handlers::{self, TimelineAppState};

/// Create the Timeline router with the SQLite repository
pub fn timeline_router(repo: SqliteTimelineRepository) -> Router {
    let state = TimelineAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/user/tweets/feed/",
            get(handlers::feed::<SqliteTimelineRepository>),
        )
        .route(
            "/user/following/",
            get(handlers::following::<SqliteTimelineRepository>),
        )
        .route(
            "/user/followers/",
            get(handlers::followers::<SqliteTimelineRepository>),
        )
        .route(
            "/user/tweets/",
            get(handlers::own_tweets::<SqliteTimelineRepository>)
                .post(handlers::post_tweet::<SqliteTimelineRepository>),
        )
        .route(
            "/tweets/{tweet_id}/",
            get(handlers::tweet_detail::<SqliteTimelineRepository>)
                .delete(handlers::delete_tweet::<SqliteTimelineRepository>),
        )
        .route(
            "/tweets/{tweet_id}/likes/",
            get(handlers::tweet_likes::<SqliteTimelineRepository>),
        )
        .route(
            "/tweets/{tweet_id}/replies/",
            get(handlers::tweet_replies::<SqliteTimelineRepository>),
        )
        .with_state(state)
}
