//! Response timing header.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

pub const PROCESS_TIME_HEADER: HeaderName = HeaderName::from_static("x-process-time");

/// Adds `x-process-time` (seconds, as a decimal) to every response.
pub async fn layer(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let mut response = next.run(req).await;

    let elapsed = started.elapsed().as_secs_f64();
    if let Ok(value) = HeaderValue::from_str(&elapsed.to_string()) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }

    response
}
