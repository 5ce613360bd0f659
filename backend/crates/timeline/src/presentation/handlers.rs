//! HTTP Handlers
//!
//! All routes here sit behind the bearer-token middleware; the caller
//! identity arrives as a [`kernel::principal::AuthUser`] request
//! extension.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use std::sync::Arc;

use kernel::id::TweetId;
use kernel::principal::AuthUser;

use crate::application::delete_tweet::DeleteTweetUseCase;
use crate::application::feed::FeedUseCase;
use crate::application::follows::FollowListUseCase;
use crate::application::own_tweets::OwnTweetsUseCase;
use crate::application::post_tweet::PostTweetUseCase;
use crate::application::read_tweet::ReadTweetUseCase;
use crate::domain::repository::TimelineRepository;
use crate::error::{TimelineError, TimelineResult};
use crate::presentation::dto::{
    FeedItem, LikesResponse, NameItem, PostTweetRequest, RepliesResponse, ReplyItem, TweetDetail,
};

/// Shared state for timeline handlers
#[derive(Clone)]
pub struct TimelineAppState<R>
where
    R: TimelineRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /user/tweets/feed/
pub async fn feed<R>(
    State(state): State<TimelineAppState<R>>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> TimelineResult<Json<Vec<FeedItem>>>
where
    R: TimelineRepository + Clone + Send + Sync + 'static,
{
    let tweets = FeedUseCase::new(state.repo.clone()).execute(caller).await?;

    Ok(Json(tweets.into_iter().map(FeedItem::from).collect()))
}

/// GET /user/following/
pub async fn following<R>(
    State(state): State<TimelineAppState<R>>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> TimelineResult<Json<Vec<NameItem>>>
where
    R: TimelineRepository + Clone + Send + Sync + 'static,
{
    let names = FollowListUseCase::new(state.repo.clone())
        .following(caller)
        .await?;

    Ok(Json(names.into_iter().map(|name| NameItem { name }).collect()))
}

/// GET /user/followers/
pub async fn followers<R>(
    State(state): State<TimelineAppState<R>>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> TimelineResult<Json<Vec<NameItem>>>
where
    R: TimelineRepository + Clone + Send + Sync + 'static,
{
    let names = FollowListUseCase::new(state.repo.clone())
        .followers(caller)
        .await?;

    Ok(Json(names.into_iter().map(|name| NameItem { name }).collect()))
}

/// GET /tweets/{tweet_id}/
pub async fn tweet_detail<R>(
    State(state): State<TimelineAppState<R>>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(tweet_id): Path<String>,
) -> TimelineResult<Json<TweetDetail>>
where
    R: TimelineRepository + Clone + Send + Sync + 'static,
{
    // A malformed id can never pass the follow check
    let tweet_id = TweetId::parse_str(&tweet_id).map_err(|_| TimelineError::NotFollowingAuthor)?;

    let summary = ReadTweetUseCase::new(state.repo.clone())
        .summary(caller, tweet_id)
        .await?;

    Ok(Json(TweetDetail::from(summary)))
}

/// GET /tweets/{tweet_id}/likes/
pub async fn tweet_likes<R>(
    State(state): State<TimelineAppState<R>>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(tweet_id): Path<String>,
) -> TimelineResult<Json<LikesResponse>>
where
    R: TimelineRepository + Clone + Send + Sync + 'static,
{
    let tweet_id = TweetId::parse_str(&tweet_id).map_err(|_| TimelineError::NotFollowingAuthor)?;

    let likes = ReadTweetUseCase::new(state.repo.clone())
        .likes(caller, tweet_id)
        .await?;

    Ok(Json(LikesResponse { likes }))
}

/// GET /tweets/{tweet_id}/replies/
pub async fn tweet_replies<R>(
    State(state): State<TimelineAppState<R>>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(tweet_id): Path<String>,
) -> TimelineResult<Json<RepliesResponse>>
where
    R: TimelineRepository + Clone + Send + Sync + 'static,
{
    let tweet_id = TweetId::parse_str(&tweet_id).map_err(|_| TimelineError::NotFollowingAuthor)?;

    let replies = ReadTweetUseCase::new(state.repo.clone())
        .replies(caller, tweet_id)
        .await?;

    Ok(Json(RepliesResponse {
        replies: replies.into_iter().map(ReplyItem::from).collect(),
    }))
}

/// GET /user/tweets/
pub async fn own_tweets<R>(
    State(state): State<TimelineAppState<R>>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> TimelineResult<Json<Vec<TweetDetail>>>
where
    R: TimelineRepository + Clone + Send + Sync + 'static,
{
    let tweets = OwnTweetsUseCase::new(state.repo.clone())
        .execute(caller)
        .await?;

    Ok(Json(tweets.into_iter().map(TweetDetail::from).collect()))
}

/// POST /user/tweets/
pub async fn post_tweet<R>(
    State(state): State<TimelineAppState<R>>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Json(req): Json<PostTweetRequest>,
) -> TimelineResult<&'static str>
where
    R: TimelineRepository + Clone + Send + Sync + 'static,
{
    PostTweetUseCase::new(state.repo.clone())
        .execute(caller, req.tweet)
        .await?;

    Ok("Created a Tweet")
}

/// DELETE /tweets/{tweet_id}/
pub async fn delete_tweet<R>(
    State(state): State<TimelineAppState<R>>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(tweet_id): Path<String>,
) -> TimelineResult<&'static str>
where
    R: TimelineRepository + Clone + Send + Sync + 'static,
{
    // A malformed id never names a stored tweet
    let tweet_id = TweetId::parse_str(&tweet_id).map_err(|_| TimelineError::TweetNotFound)?;

    DeleteTweetUseCase::new(state.repo.clone())
        .execute(caller, tweet_id)
        .await?;

    Ok("Tweet Removed")
}
