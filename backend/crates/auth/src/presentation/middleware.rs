//! Auth Middleware
//!
//! Bearer-token gate for protected routes. Verifies the token from the
//! `Authorization` header and threads the decoded identity to handlers
//! as a [`kernel::principal::AuthUser`] request extension.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::id::UserId;
use kernel::principal::AuthUser;
use platform::token::TokenCodec;

use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid bearer token
///
/// Missing and unverifiable credentials are rejected identically.
/// No expiry is checked; tokens are valid indefinitely once issued.
pub async fn require_bearer(
    State(state): State<AuthMiddlewareState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|t| t.to_string());

    let Some(token) = token else {
        return Err(AuthError::MissingToken.into_response());
    };

    let codec = TokenCodec::new(state.config.token_secret.as_str());

    let subject = codec
        .verify(&token)
        .map_err(|_| AuthError::InvalidToken.into_response())?;

    // A token whose subject is not a well-formed id never names a user
    let user_id = UserId::parse_str(&subject)
        .map_err(|_| AuthError::InvalidToken.into_response())?;

    req.extensions_mut().insert(AuthUser(user_id));

    Ok(next.run(req).await)
}
