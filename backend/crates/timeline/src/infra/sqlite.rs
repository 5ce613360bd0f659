//! SQLite Repository Implementation

use chrono::DateTime;
use kernel::id::{LikeId, ReplyId, TweetId, UserId};
use sqlx::SqlitePool;

use crate::domain::entity::tweet::{FeedTweet, ReplyEntry, Tweet, TweetSummary};
use crate::domain::repository::TimelineRepository;
use crate::error::{TimelineError, TimelineResult};

/// SQLite-backed timeline repository
#[derive(Clone)]
pub struct SqliteTimelineRepository {
    pool: SqlitePool,
}

impl SqliteTimelineRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct TweetRow {
    tweet_id: String,
    body: String,
    user_id: String,
    created_at_ms: i64,
}

impl TweetRow {
    fn into_tweet(self) -> TimelineResult<Tweet> {
        let tweet_id = TweetId::parse_str(&self.tweet_id)
            .map_err(|e| TimelineError::Internal(format!("Corrupt tweet_id column: {e}")))?;

        let user_id = UserId::parse_str(&self.user_id)
            .map_err(|e| TimelineError::Internal(format!("Corrupt user_id column: {e}")))?;

        let created_at = DateTime::from_timestamp_millis(self.created_at_ms)
            .ok_or_else(|| TimelineError::Internal("Corrupt created_at_ms column".to_string()))?;

        Ok(Tweet {
            tweet_id,
            body: self.body,
            user_id,
            created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct FeedRow {
    username: String,
    body: String,
    created_at_ms: i64,
}

impl FeedRow {
    fn into_feed_tweet(self) -> TimelineResult<FeedTweet> {
        let created_at = DateTime::from_timestamp_millis(self.created_at_ms)
            .ok_or_else(|| TimelineError::Internal("Corrupt created_at_ms column".to_string()))?;

        Ok(FeedTweet {
            username: self.username,
            body: self.body,
            created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    body: String,
    likes: i64,
    replies: i64,
    created_at_ms: i64,
}

impl SummaryRow {
    fn into_summary(self) -> TimelineResult<TweetSummary> {
        let created_at = DateTime::from_timestamp_millis(self.created_at_ms)
            .ok_or_else(|| TimelineError::Internal("Corrupt created_at_ms column".to_string()))?;

        Ok(TweetSummary {
            body: self.body,
            likes: self.likes,
            replies: self.replies,
            created_at,
        })
    }
}

// ============================================================================
// Timeline Repository Implementation
// ============================================================================

impl TimelineRepository for SqliteTimelineRepository {
    async fn create_tweet(&self, tweet: &Tweet) -> TimelineResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tweets (tweet_id, body, user_id, created_at_ms)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(tweet.tweet_id.to_string())
        .bind(&tweet.body)
        .bind(tweet.user_id.to_string())
        .bind(tweet.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_tweet(&self, tweet_id: TweetId) -> TimelineResult<Option<Tweet>> {
        let row = sqlx::query_as::<_, TweetRow>(
            r#"
            SELECT tweet_id, body, user_id, created_at_ms
            FROM tweets
            WHERE tweet_id = ?
            "#,
        )
        .bind(tweet_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_tweet()).transpose()
    }

    async fn delete_tweet(&self, tweet_id: TweetId) -> TimelineResult<()> {
        let id = tweet_id.to_string();

        // Edges reference the tweet, so they go first.
        sqlx::query("DELETE FROM likes WHERE tweet_id = ?")
            .bind(&id)
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM replies WHERE tweet_id = ?")
            .bind(&id)
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM tweets WHERE tweet_id = ?")
            .bind(&id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn caller_follows_author(
        &self,
        tweet_id: TweetId,
        caller: UserId,
    ) -> TimelineResult<bool> {
        let follows = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM tweets t
                JOIN followers f ON f.following_id = t.user_id
                WHERE t.tweet_id = ? AND f.follower_id = ?
            )
            "#,
        )
        .bind(tweet_id.to_string())
        .bind(caller.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(follows)
    }

    async fn feed_for(&self, caller: UserId, limit: i64) -> TimelineResult<Vec<FeedTweet>> {
        let rows = sqlx::query_as::<_, FeedRow>(
            r#"
            SELECT u.username, t.body, t.created_at_ms
            FROM followers f
            JOIN tweets t ON t.user_id = f.following_id
            JOIN users u ON u.user_id = t.user_id
            WHERE f.follower_id = ?
            ORDER BY t.created_at_ms DESC
            LIMIT ?
            "#,
        )
        .bind(caller.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_feed_tweet()).collect()
    }

    async fn following_names(&self, caller: UserId) -> TimelineResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT u.display_name
            FROM followers f
            JOIN users u ON u.user_id = f.following_id
            WHERE f.follower_id = ?
            "#,
        )
        .bind(caller.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    async fn follower_names(&self, caller: UserId) -> TimelineResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT u.display_name
            FROM followers f
            JOIN users u ON u.user_id = f.follower_id
            WHERE f.following_id = ?
            "#,
        )
        .bind(caller.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    async fn tweet_summary(&self, tweet_id: TweetId) -> TimelineResult<Option<TweetSummary>> {
        let row = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT
                t.body,
                (SELECT COUNT(*) FROM likes l WHERE l.tweet_id = t.tweet_id) AS likes,
                (SELECT COUNT(*) FROM replies r WHERE r.tweet_id = t.tweet_id) AS replies,
                t.created_at_ms
            FROM tweets t
            WHERE t.tweet_id = ?
            "#,
        )
        .bind(tweet_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_summary()).transpose()
    }

    async fn liker_usernames(&self, tweet_id: TweetId) -> TimelineResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT u.username
            FROM likes l
            JOIN users u ON u.user_id = l.user_id
            WHERE l.tweet_id = ?
            "#,
        )
        .bind(tweet_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    async fn reply_entries(&self, tweet_id: TweetId) -> TimelineResult<Vec<ReplyEntry>> {
        let rows = sqlx::query_as::<_, (String, String)>(
            r#"
            SELECT u.display_name, r.body
            FROM replies r
            JOIN users u ON u.user_id = r.user_id
            WHERE r.tweet_id = ?
            "#,
        )
        .bind(tweet_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(display_name, body)| ReplyEntry { display_name, body })
            .collect())
    }

    async fn tweets_of(&self, owner: UserId) -> TimelineResult<Vec<TweetSummary>> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT
                t.body,
                (SELECT COUNT(*) FROM likes l WHERE l.tweet_id = t.tweet_id) AS likes,
                (SELECT COUNT(*) FROM replies r WHERE r.tweet_id = t.tweet_id) AS replies,
                t.created_at_ms
            FROM tweets t
            WHERE t.user_id = ?
            ORDER BY t.created_at_ms ASC
            "#,
        )
        .bind(owner.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_summary()).collect()
    }

    async fn add_follow(&self, follower: UserId, following: UserId) -> TimelineResult<()> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO followers (follower_id, following_id)
            VALUES (?, ?)
            "#,
        )
        .bind(follower.to_string())
        .bind(following.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn add_like(&self, tweet_id: TweetId, user_id: UserId) -> TimelineResult<()> {
        sqlx::query(
            r#"
            INSERT INTO likes (like_id, tweet_id, user_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(LikeId::new().to_string())
        .bind(tweet_id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn add_reply(
        &self,
        tweet_id: TweetId,
        user_id: UserId,
        body: &str,
    ) -> TimelineResult<()> {
        sqlx::query(
            r#"
            INSERT INTO replies (reply_id, tweet_id, user_id, body)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(ReplyId::new().to_string())
        .bind(tweet_id.to_string())
        .bind(user_id.to_string())
        .bind(body)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
