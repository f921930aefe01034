//! Whole-request deadline middleware.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::warn;

/// Aborts request processing once `timeout` has elapsed.
///
/// The in-flight handler future is dropped and the client receives
/// `504 Gateway Timeout`:
///
/// ```json
/// {
///   "detail": "Request processing time exceeded limit",
///   "processing_time": 5.0012
/// }
/// ```
///
/// `processing_time` is in seconds.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/url", post(shorten_handler))
///     .layer(middleware::from_fn_with_state(Duration::from_secs(5), timeout::layer));
/// ```
pub async fn layer(State(timeout): State<Duration>, req: Request, next: Next) -> Response {
    let started = Instant::now();

    match tokio::time::timeout(timeout, next.run(req)).await {
        Ok(response) => response,
        Err(_) => {
            let processing_time = started.elapsed().as_secs_f64();
            warn!(processing_time, "Request processing time exceeded limit");

            (
                StatusCode::GATEWAY_TIMEOUT,
                Json(json!({
                    "detail": "Request processing time exceeded limit",
                    "processing_time": processing_time,
                })),
            )
                .into_response()
        }
    }
}
