//! Infrastructure layer for external integrations.
//!
//! Implements the repository contracts defined by the domain layer.
//!
//! - [`persistence`] - Redis and in-memory link stores

pub mod persistence;
