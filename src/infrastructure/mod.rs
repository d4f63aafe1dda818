//! Infrastructure layer for external integrations.
//!
//! Implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Redis and in-memory caches, search result memoization
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`security`] - AES-GCM encryption, Argon2 hashing and JWT tokens

pub mod cache;
pub mod persistence;
pub mod security;
