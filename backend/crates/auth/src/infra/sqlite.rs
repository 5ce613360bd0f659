//! SQLite Repository Implementation

use chrono::DateTime;
use kernel::id::UserId;
use platform::password::HashedPassword;
use sqlx::SqlitePool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// SQLite-backed user repository
#[derive(Clone)]
pub struct SqliteAuthRepository {
    pool: SqlitePool,
}

impl SqliteAuthRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: String,
    username: String,
    password_hash: String,
    display_name: String,
    gender: String,
    created_at_ms: i64,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let user_id = UserId::parse_str(&self.user_id)
            .map_err(|e| AuthError::Internal(format!("Corrupt user_id column: {e}")))?;

        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let created_at = DateTime::from_timestamp_millis(self.created_at_ms)
            .ok_or_else(|| AuthError::Internal("Corrupt created_at_ms column".to_string()))?;

        Ok(User {
            user_id,
            username: self.username,
            password_hash,
            display_name: self.display_name,
            gender: self.gender,
            created_at,
        })
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for SqliteAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                username,
                password_hash,
                display_name,
                gender,
                created_at_ms
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.user_id.to_string())
        .bind(&user.username)
        .bind(user.password_hash.as_phc_string())
        .bind(&user.display_name)
        .bind(&user.gender)
        .bind(user.created_at.timestamp_millis())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // The UNIQUE constraint backstops the check-then-insert race.
            Err(sqlx::Error::Database(db_err))
                if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation =>
            {
                Err(AuthError::UserAlreadyExists)
            }
            Err(e) => Err(AuthError::Database(e)),
        }
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                username,
                password_hash,
                display_name,
                gender,
                created_at_ms
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_username(&self, username: &str) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
