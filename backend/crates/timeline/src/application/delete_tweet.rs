//! Delete Tweet Use Case
//!
//! Only the owner may delete a tweet. Unlike the read paths, deletion
//! reports a missing tweet as not found rather than as an
//! authorization failure, since the ownership check needs the row.

use std::sync::Arc;

use kernel::id::{TweetId, UserId};

use crate::domain::repository::TimelineRepository;
use crate::error::{TimelineError, TimelineResult};

/// Delete tweet use case
pub struct DeleteTweetUseCase<R>
where
    R: TimelineRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteTweetUseCase<R>
where
    R: TimelineRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: UserId, tweet_id: TweetId) -> TimelineResult<()> {
        let tweet = self
            .repo
            .find_tweet(tweet_id)
            .await?
            .ok_or(TimelineError::TweetNotFound)?;

        if tweet.user_id != caller {
            return Err(TimelineError::NotTweetOwner);
        }

        self.repo.delete_tweet(tweet_id).await?;

        tracing::info!(
            tweet_id = %tweet_id,
            user_id = %caller,
            "Tweet deleted"
        );

        Ok(())
    }
}
