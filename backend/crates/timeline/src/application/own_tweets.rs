//! Own Tweets Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::tweet::TweetSummary;
use crate::domain::repository::TimelineRepository;
use crate::error::TimelineResult;

/// Own tweets use case
///
/// Lists the caller's own tweets with counts, oldest first. No follow
/// check applies here; the caller always sees their own tweets.
pub struct OwnTweetsUseCase<R>
where
    R: TimelineRepository,
{
    repo: Arc<R>,
}

impl<R> OwnTweetsUseCase<R>
where
    R: TimelineRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: UserId) -> TimelineResult<Vec<TweetSummary>> {
        self.repo.tweets_of(caller).await
    }
}
