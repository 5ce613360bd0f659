//! Application Configuration
//!
//! Configuration for the Auth application layer.

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared HS256 secret for token signing and verification
    pub token_secret: String,
}

impl AuthConfig {
    /// Create config with an explicit secret (production path; the
    /// secret comes from the environment)
    pub fn new(token_secret: impl Into<String>) -> Self {
        Self {
            token_secret: token_secret.into(),
        }
    }

    /// Create config for development
    ///
    /// Fixed secret so restarts do not invalidate issued tokens.
    pub fn development() -> Self {
        Self::new("dev-token-secret")
    }
}
