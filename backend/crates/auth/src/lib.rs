//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User registration with username + password + profile fields
//! - Login issuing a bearer token that embeds the user id
//! - Bearer-token middleware for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Tokens are HS256-signed and carry no expiry (valid until the
//!   signing secret changes)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::sqlite::SqliteAuthRepository;
pub use presentation::middleware::{AuthMiddlewareState, require_bearer};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
