//! Domain Layer
//!
//! Contains entities, read models, and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::tweet::{FeedTweet, ReplyEntry, Tweet, TweetSummary};
pub use repository::TimelineRepository;
