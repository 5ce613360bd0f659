//! Login Use Case
//!
//! Authenticates a user and issues a bearer token embedding the user id.
//!
//! "Invalid user" and "Invalid password" are deliberately distinct
//! responses; the account-existence disclosure is an inherited,
//! accepted contract.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenCodec;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed bearer token
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::UnknownUser)?;

        // A password that fails the stored policy can never match a
        // hash of one that passed it.
        let clear_text =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::WrongPassword)?;

        let password_valid = user
            .password_hash
            .verify(&clear_text)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !password_valid {
            return Err(AuthError::WrongPassword);
        }

        let token = TokenCodec::new(self.config.token_secret.as_str())
            .issue(&user.user_id.to_string())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { token })
    }
}
