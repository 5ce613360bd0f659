//! Timeline Error Types
//!
//! The visibility failures keep the source wire contract: a 401 with
//! body "Invalid Request" covers both "author not followed" and
//! "tweet does not exist" on the read paths, and also covers deleting
//! someone else's tweet. Only the delete path reports a real 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Timeline-specific result type alias
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Timeline-specific error variants
#[derive(Debug, Error)]
pub enum TimelineError {
    /// Caller does not follow the tweet's author (or the tweet does
    /// not exist; the two are indistinguishable by contract)
    #[error("Invalid Request")]
    NotFollowingAuthor,

    /// Tweet id names no tweet (delete path only)
    #[error("Tweet does not exist")]
    TweetNotFound,

    /// Caller is not the tweet's owner
    #[error("Invalid Request")]
    NotTweetOwner,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TimelineError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TimelineError::NotFollowingAuthor | TimelineError::NotTweetOwner => {
                StatusCode::UNAUTHORIZED
            }
            TimelineError::TweetNotFound => StatusCode::NOT_FOUND,
            TimelineError::Database(_) | TimelineError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            // 401 on the wire even though the failure is authorization
            TimelineError::NotFollowingAuthor | TimelineError::NotTweetOwner => {
                ErrorKind::Unauthorized
            }
            TimelineError::TweetNotFound => ErrorKind::NotFound,
            TimelineError::Database(_) | TimelineError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details never reach the client.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::internal("Internal Server Error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TimelineError::Database(e) => {
                tracing::error!(error = %e, "Timeline database error");
            }
            TimelineError::Internal(msg) => {
                tracing::error!(message = %msg, "Timeline internal error");
            }
            TimelineError::NotTweetOwner => {
                tracing::warn!("Attempt to delete another user's tweet");
            }
            _ => {
                tracing::debug!(error = %self, "Timeline error");
            }
        }
    }
}

impl IntoResponse for TimelineError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
