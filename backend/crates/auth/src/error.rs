//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. The user-facing messages and
//! status codes reproduce the wire contract exactly: validation and
//! credential failures are all 400, token failures are 401.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No bearer credential on a protected route
    #[error("Invalid JWT Token")]
    MissingToken,

    /// Bearer credential failed verification or decoding
    #[error("Invalid JWT Token")]
    InvalidToken,

    /// Username already registered
    #[error("User already exists")]
    UserAlreadyExists,

    /// Registration password below the minimum length
    #[error("Password is too short")]
    PasswordTooShort,

    /// Registration password above the maximum length
    #[error("Password is too long")]
    PasswordTooLong,

    /// Login with a username no user has
    #[error("Invalid user")]
    UnknownUser,

    /// Login password did not verify against the stored hash
    #[error("Invalid password")]
    WrongPassword,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::UserAlreadyExists
            | AuthError::PasswordTooShort
            | AuthError::PasswordTooLong
            | AuthError::UnknownUser
            | AuthError::WrongPassword => StatusCode::BAD_REQUEST,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::UserAlreadyExists
            | AuthError::PasswordTooShort
            | AuthError::PasswordTooLong
            | AuthError::UnknownUser
            | AuthError::WrongPassword => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
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
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UnknownUser | AuthError::WrongPassword => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::MissingToken | AuthError::InvalidToken => {
                tracing::debug!("Rejected bearer credential");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_match_wire_contract() {
        assert_eq!(AuthError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::UserAlreadyExists.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::PasswordTooShort.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::UnknownUser.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::WrongPassword.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_match_wire_contract() {
        assert_eq!(AuthError::MissingToken.to_string(), "Invalid JWT Token");
        assert_eq!(AuthError::InvalidToken.to_string(), "Invalid JWT Token");
        assert_eq!(AuthError::UserAlreadyExists.to_string(), "User already exists");
        assert_eq!(AuthError::PasswordTooShort.to_string(), "Password is too short");
        assert_eq!(AuthError::UnknownUser.to_string(), "Invalid user");
        assert_eq!(AuthError::WrongPassword.to_string(), "Invalid password");
    }

    #[test]
    fn test_server_errors_are_masked() {
        let err = AuthError::Internal("pool exploded".into());
        assert_eq!(err.to_app_error().message(), "Internal Server Error");
    }
}
