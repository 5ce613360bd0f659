//! Read Tweet Use Cases
//!
//! A tweet and its likes and replies are visible only to callers who
//! follow the author. Authors do not implicitly see their own tweets
//! through these endpoints; the visibility predicate is a follow edge
//! and nothing else. A nonexistent tweet fails the same predicate, so
//! these reads never distinguish "missing" from "not followed".

use std::sync::Arc;

use kernel::id::{TweetId, UserId};

use crate::domain::entity::tweet::{ReplyEntry, TweetSummary};
use crate::domain::repository::TimelineRepository;
use crate::error::{TimelineError, TimelineResult};

/// Read tweet use case
pub struct ReadTweetUseCase<R>
where
    R: TimelineRepository,
{
    repo: Arc<R>,
}

impl<R> ReadTweetUseCase<R>
where
    R: TimelineRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Body plus like and reply counts
    pub async fn summary(&self, caller: UserId, tweet_id: TweetId) -> TimelineResult<TweetSummary> {
        self.authorize(caller, tweet_id).await?;
        self.repo
            .tweet_summary(tweet_id)
            .await?
            .ok_or(TimelineError::NotFollowingAuthor)
    }

    /// Usernames who liked the tweet
    pub async fn likes(&self, caller: UserId, tweet_id: TweetId) -> TimelineResult<Vec<String>> {
        self.authorize(caller, tweet_id).await?;
        self.repo.liker_usernames(tweet_id).await
    }

    /// Replies with their authors' display names
    pub async fn replies(
        &self,
        caller: UserId,
        tweet_id: TweetId,
    ) -> TimelineResult<Vec<ReplyEntry>> {
        self.authorize(caller, tweet_id).await?;
        self.repo.reply_entries(tweet_id).await
    }

    async fn authorize(&self, caller: UserId, tweet_id: TweetId) -> TimelineResult<()> {
        if self.repo.caller_follows_author(tweet_id, caller).await? {
            Ok(())
        } else {
            Err(TimelineError::NotFollowingAuthor)
        }
    }
}
