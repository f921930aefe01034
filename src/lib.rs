//! # Link Shortener
//!
//! A small URL shortening service built with Axum and Redis: it issues
//! fixed-length random short codes, redirects them, counts clicks and supports
//! soft deletion.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`Link`](domain::entities::Link) entity and repository trait
//! - **Application Layer** ([`application`]) - Link lifecycle orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! Every request is a synchronous read-modify-write against the store; there
//! is no cache, queue or background worker.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! export BASE_URL="https://s.example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::Link;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{InMemoryLinkRepository, RedisLinkRepository};
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::CodeGenerator;
}
