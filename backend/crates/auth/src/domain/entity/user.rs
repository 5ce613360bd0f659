//! User Entity
//!
//! A registered account. Users are created at registration and never
//! mutated or deleted afterwards.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Login name (unique)
    pub username: String,
    /// Argon2id hash of the password, PHC format
    pub password_hash: HashedPassword,
    /// Display name shown in follower lists and replies
    pub display_name: String,
    /// Free-form gender field from registration
    pub gender: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(
        username: String,
        password_hash: HashedPassword,
        display_name: String,
        gender: String,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            username,
            password_hash,
            display_name,
            gender,
            created_at: Utc::now(),
        }
    }
}
