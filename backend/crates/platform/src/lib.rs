//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) with zeroized clear-text handling
//! - Bearer-token issuing and verification (HS256)

pub mod password;
pub mod token;
