//! Tweet Entity and Read Models
//!
//! `Tweet` is the stored row. The other types are query-shaped read
//! models: they exist because every list endpoint returns a different
//! projection, not because the domain has four kinds of tweet.

use chrono::{DateTime, Utc};
use kernel::id::{TweetId, UserId};

/// Tweet entity
///
/// Created by its owner, deletable only by its owner, never updated.
#[derive(Debug, Clone)]
pub struct Tweet {
    pub tweet_id: TweetId,
    /// Body text; no length validation by contract
    pub body: String,
    /// Owning user
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Tweet {
    /// Create a new tweet owned by `user_id`, timestamped now
    pub fn new(user_id: UserId, body: String) -> Self {
        Self {
            tweet_id: TweetId::new(),
            body,
            user_id,
            created_at: Utc::now(),
        }
    }
}

/// A feed entry: someone the caller follows said something
#[derive(Debug, Clone, PartialEq)]
pub struct FeedTweet {
    /// Author's login name
    pub username: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A tweet with its aggregate counts
#[derive(Debug, Clone, PartialEq)]
pub struct TweetSummary {
    pub body: String,
    pub likes: i64,
    pub replies: i64,
    pub created_at: DateTime<Utc>,
}

/// One reply with its author's display name
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyEntry {
    pub display_name: String,
    pub body: String,
}
