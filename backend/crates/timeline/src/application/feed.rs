//! Feed Use Case
//!
//! The feed shows the latest tweets from users the caller follows,
//! newest first. The page size is fixed; there is no pagination cursor.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::tweet::FeedTweet;
use crate::domain::repository::TimelineRepository;
use crate::error::TimelineResult;

/// Fixed feed page size
const FEED_LIMIT: i64 = 4;

/// Feed use case
pub struct FeedUseCase<R>
where
    R: TimelineRepository,
{
    repo: Arc<R>,
}

impl<R> FeedUseCase<R>
where
    R: TimelineRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: UserId) -> TimelineResult<Vec<FeedTweet>> {
        self.repo.feed_for(caller, FEED_LIMIT).await
    }
}
