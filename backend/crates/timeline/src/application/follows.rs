//! Follow List Use Cases
//!
//! Lists the caller's follow graph in both directions. Follows are
//! stored as an edge table, so both directions are plain lookups.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::TimelineRepository;
use crate::error::TimelineResult;

/// Follow list use case
pub struct FollowListUseCase<R>
where
    R: TimelineRepository,
{
    repo: Arc<R>,
}

impl<R> FollowListUseCase<R>
where
    R: TimelineRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Display names of users the caller follows
    pub async fn following(&self, caller: UserId) -> TimelineResult<Vec<String>> {
        self.repo.following_names(caller).await
    }

    /// Display names of users following the caller
    pub async fn followers(&self, caller: UserId) -> TimelineResult<Vec<String>> {
        self.repo.follower_names(caller).await
    }
}
