//! Link record store implementations.
//!
//! - [`RedisLinkRepository`] - Redis hashes, one per short code (production)
//! - [`InMemoryLinkRepository`] - `DashMap`-backed store for development and tests

mod error;
mod memory_link_repository;
mod redis_link_repository;

pub use error::StoreError;
pub use memory_link_repository::InMemoryLinkRepository;
pub use redis_link_repository::RedisLinkRepository;
