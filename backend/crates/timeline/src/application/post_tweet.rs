//! Post Tweet Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::tweet::Tweet;
use crate::domain::repository::TimelineRepository;
use crate::error::TimelineResult;

/// Post tweet use case
pub struct PostTweetUseCase<R>
where
    R: TimelineRepository,
{
    repo: Arc<R>,
}

impl<R> PostTweetUseCase<R>
where
    R: TimelineRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: UserId, body: String) -> TimelineResult<()> {
        let tweet = Tweet::new(caller, body);
        self.repo.create_tweet(&tweet).await?;

        tracing::info!(
            tweet_id = %tweet.tweet_id,
            user_id = %tweet.user_id,
            "Tweet created"
        );

        Ok(())
    }
}
