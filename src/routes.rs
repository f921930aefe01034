//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`            - Create a short link
//! - `GET    /{code}`         - Redirect to the original URL (counts a click)
//! - `GET    /info/{code}`    - Stored record for a short link
//! - `DELETE /delete/{code}`  - Deactivate a short link
//! - `GET    /health`         - Store health check
//!
//! # Middleware
//!
//! - **Process time** - `x-process-time` header on every response
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Whole-request deadline, `504` on expiry
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    deactivate_link_handler, health_handler, link_info_handler, redirect_handler, shorten_handler,
};
use crate::api::middleware::{process_time, timeout, tracing};
use crate::state::AppState;
use axum::routing::{delete, get, post};
use axum::{Router, middleware};
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline applied to every request
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/url", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/info/{code}", get(link_info_handler))
        .route("/delete/{code}", delete(deactivate_link_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            request_timeout,
            timeout::layer,
        ))
        .layer(tracing::layer())
        .layer(middleware::from_fn(process_time::layer))
}

/// Constructs the served application: [`router`] with trailing slashes trimmed.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
