//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Structured request/response logging
//! - [`timeout`] - Whole-request deadline with a `504` fallback
//! - [`process_time`] - `x-process-time` response header

pub mod process_time;
pub mod timeout;
pub mod tracing;
