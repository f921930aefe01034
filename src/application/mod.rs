//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, validation and state transitions,
//! and expose a small API for HTTP handlers and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Short link lifecycle

pub mod services;
