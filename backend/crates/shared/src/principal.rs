//! Authenticated Principal
//!
//! The identity value the bearer-token middleware decodes and threads
//! through to protected handlers via request extensions. Handlers take
//! this as an explicit parameter instead of reading ambient state.

use crate::id::UserId;

/// The authenticated caller of a protected request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub UserId);

impl AuthUser {
    /// Get the caller's user ID
    pub fn user_id(&self) -> UserId {
        self.0
    }
}
