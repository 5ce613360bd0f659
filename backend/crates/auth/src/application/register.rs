//! Register Use Case
//!
//! Creates a new user account.
//!
//! The existence check before the insert leaves a benign race window;
//! the UNIQUE constraint on `users.username` is the backstop, and the
//! repository reports a constraint hit as the same conflict error.

use std::sync::Arc;

use platform::password::{ClearTextPassword, PasswordPolicyError};

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub gender: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<()> {
        // Check if username is taken
        if self.repo.exists_by_username(&input.username).await? {
            return Err(AuthError::UserAlreadyExists);
        }

        // Validate and hash password
        let clear_text = ClearTextPassword::new(input.password).map_err(|e| match e {
            PasswordPolicyError::TooShort { .. } => AuthError::PasswordTooShort,
            PasswordPolicyError::TooLong { .. } => AuthError::PasswordTooLong,
        })?;

        let password_hash = clear_text
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Create and persist
        let user = User::new(
            input.username,
            password_hash,
            input.display_name,
            input.gender,
        );

        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(())
    }
}
