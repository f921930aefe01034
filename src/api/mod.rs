//! HTTP API layer.
//!
//! Translates HTTP requests into [`crate::application::services::LinkService`]
//! calls and formats responses.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request timing, deadlines and tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
