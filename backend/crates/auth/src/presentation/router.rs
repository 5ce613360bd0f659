//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::infra::sqlite::SqliteAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the SQLite repository
pub fn auth_router(repo: SqliteAuthRepository, config: AuthConfig) -> Router {
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register/", post(handlers::register::<SqliteAuthRepository>))
        .route("/login/", post(handlers::login::<SqliteAuthRepository>))
        .with_state(state)
}
