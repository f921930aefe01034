use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use axum_test::TestServer;
use link_shortener::api::middleware::{process_time, timeout};
use std::time::Duration;

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_millis(500)).await;
    "done"
}

async fn fast_handler() -> &'static str {
    "done"
}

fn create_router(deadline: Duration) -> Router {
    Router::new()
        .route("/slow", get(slow_handler))
        .route("/fast", get(fast_handler))
        .layer(middleware::from_fn_with_state(deadline, timeout::layer))
        .layer(middleware::from_fn(process_time::layer))
}

#[tokio::test]
async fn test_timeout_returns_gateway_timeout() {
    let server = TestServer::new(create_router(Duration::from_millis(50))).unwrap();

    let response = server.get("/slow").await;

    response.assert_status(StatusCode::GATEWAY_TIMEOUT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["detail"], "Request processing time exceeded limit");

    let processing_time = json["processing_time"].as_f64().unwrap();
    assert!(processing_time >= 0.05);
    assert!(processing_time < 0.5);
}

#[tokio::test]
async fn test_timeout_passes_fast_requests_through() {
    let server = TestServer::new(create_router(Duration::from_secs(5))).unwrap();

    let response = server.get("/fast").await;

    response.assert_status_ok();
    response.assert_text("done");
}

#[tokio::test]
async fn test_process_time_header_on_timeout() {
    let server = TestServer::new(create_router(Duration::from_millis(50))).unwrap();

    let response = server.get("/slow").await;

    let value = response.header("x-process-time");
    let seconds: f64 = value.to_str().unwrap().parse().unwrap();
    assert!(seconds >= 0.05);
}
