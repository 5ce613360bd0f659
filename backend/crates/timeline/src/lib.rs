//! Timeline Backend Module
//!
//! Tweets, follow edges, likes, replies, and the feed built from them.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, read models, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Visibility Model
//! A caller may see a tweet's detail, likes, and replies only if they
//! follow its author. The predicate is one repository method shared by
//! all three read paths, and it deliberately does not distinguish
//! "tweet does not exist" from "author not followed".

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{TimelineError, TimelineResult};
pub use infra::sqlite::SqliteTimelineRepository;
pub use presentation::router::timeline_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
