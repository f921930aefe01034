//! Core domain entities.
//!
//! The service has a single entity, [`Link`]: the stored tuple of original URL,
//! short code, click counter and active flag.

pub mod link;

pub use link::Link;
