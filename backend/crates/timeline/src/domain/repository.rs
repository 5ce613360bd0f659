//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{TweetId, UserId};

use crate::domain::entity::tweet::{FeedTweet, ReplyEntry, Tweet, TweetSummary};
use crate::error::TimelineResult;

/// Timeline repository trait
#[trait_variant::make(TimelineRepository: Send)]
pub trait LocalTimelineRepository {
    /// Persist a new tweet
    async fn create_tweet(&self, tweet: &Tweet) -> TimelineResult<()>;

    /// Find a tweet by primary key
    async fn find_tweet(&self, tweet_id: TweetId) -> TimelineResult<Option<Tweet>>;

    /// Delete a tweet
    async fn delete_tweet(&self, tweet_id: TweetId) -> TimelineResult<()>;

    /// Whether `caller` follows the author of the tweet
    ///
    /// Shared visibility predicate. Also `false` when the tweet does not exist.
    async fn caller_follows_author(
        &self,
        tweet_id: TweetId,
        caller: UserId,
    ) -> TimelineResult<bool>;

    /// Latest tweets from users `caller` follows, newest first, at most `limit`
    async fn feed_for(&self, caller: UserId, limit: i64) -> TimelineResult<Vec<FeedTweet>>;

    /// Display names of users `caller` follows
    async fn following_names(&self, caller: UserId) -> TimelineResult<Vec<String>>;

    /// Display names of users following `caller`
    async fn follower_names(&self, caller: UserId) -> TimelineResult<Vec<String>>;

    /// Body plus like and reply counts for one tweet
    async fn tweet_summary(&self, tweet_id: TweetId) -> TimelineResult<Option<TweetSummary>>;

    /// Usernames who liked the tweet
    async fn liker_usernames(&self, tweet_id: TweetId) -> TimelineResult<Vec<String>>;

    /// Replies to the tweet with their authors' display names
    async fn reply_entries(&self, tweet_id: TweetId) -> TimelineResult<Vec<ReplyEntry>>;

    /// The owner's own tweets, oldest first, with counts
    async fn tweets_of(&self, owner: UserId) -> TimelineResult<Vec<TweetSummary>>;

    /// Record a follow relationship
    async fn add_follow(&self, follower: UserId, following: UserId) -> TimelineResult<()>;

    /// Record a like
    async fn add_like(&self, tweet_id: TweetId, user_id: UserId) -> TimelineResult<()>;

    /// Record a reply
    async fn add_reply(&self, tweet_id: TweetId, user_id: UserId, body: &str)
        -> TimelineResult<()>;
}
