//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::user::User;
pub use repository::UserRepository;
