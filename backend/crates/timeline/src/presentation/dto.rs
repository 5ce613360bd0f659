//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::tweet::{FeedTweet, ReplyEntry, TweetSummary};

// ============================================================================
// Feed
// ============================================================================

/// One feed entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// Author's login name
    pub username: String,
    pub tweet: String,
    pub date_time: DateTime<Utc>,
}

impl From<FeedTweet> for FeedItem {
    fn from(t: FeedTweet) -> Self {
        Self {
            username: t.username,
            tweet: t.body,
            date_time: t.created_at,
        }
    }
}

// ============================================================================
// Follow lists
// ============================================================================

/// One follow-list entry, a display name
#[derive(Debug, Clone, Serialize)]
pub struct NameItem {
    pub name: String,
}

// ============================================================================
// Tweet detail and own tweets
// ============================================================================

/// A tweet with its like and reply counts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetDetail {
    pub tweet: String,
    pub likes: i64,
    pub replies: i64,
    pub date_time: DateTime<Utc>,
}

impl From<TweetSummary> for TweetDetail {
    fn from(s: TweetSummary) -> Self {
        Self {
            tweet: s.body,
            likes: s.likes,
            replies: s.replies,
            date_time: s.created_at,
        }
    }
}

// ============================================================================
// Likes and replies
// ============================================================================

/// Usernames who liked a tweet
#[derive(Debug, Clone, Serialize)]
pub struct LikesResponse {
    pub likes: Vec<String>,
}

/// One reply with its author's display name
#[derive(Debug, Clone, Serialize)]
pub struct ReplyItem {
    pub name: String,
    pub reply: String,
}

impl From<ReplyEntry> for ReplyItem {
    fn from(r: ReplyEntry) -> Self {
        Self {
            name: r.display_name,
            reply: r.body,
        }
    }
}

/// Replies to a tweet
#[derive(Debug, Clone, Serialize)]
pub struct RepliesResponse {
    pub replies: Vec<ReplyItem>,
}

// ============================================================================
// Create tweet
// ============================================================================

/// Create tweet request
#[derive(Debug, Clone, Deserialize)]
pub struct PostTweetRequest {
    pub tweet: String,
}
