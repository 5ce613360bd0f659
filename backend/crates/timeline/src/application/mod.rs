pub mod delete_tweet;
pub mod feed;
pub mod follows;
pub mod own_tweets;
pub mod post_tweet;
pub mod read_tweet;
