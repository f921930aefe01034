mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use link_shortener::domain::repositories::LinkRepository;
use tower::ServiceExt;

// ─── INFO ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_info_success() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "info001", "https://example.com").await;

    let response = server.get("/info/info001").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com");
    assert_eq!(json["code"], "info001");
    assert_eq!(json["clicks"], 0);
    assert_eq!(json["is_active"], true);
    assert_eq!(json["short_url"], "https://s.example.com/info001");
}

#[tokio::test]
async fn test_info_inactive_link_still_visible() {
    let (server, repo) = common::create_test_server();
    common::create_inactive_link(&repo, "info002", "https://example.com").await;

    let response = server.get("/info/info002").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["is_active"], false);
}

#[tokio::test]
async fn test_info_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/info/nonexistent").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_info_trailing_slash_on_served_app() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "info003", "https://example.com/").await;

    let response = common::create_app(state)
        .oneshot(
            Request::builder()
                .uri("/info/info003/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-process-time"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "info003");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_deactivate_success() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "del001", "https://example.com").await;

    let response = server.delete("/delete/del001").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["detail"], "URL deleted.");

    // Soft delete: the record is still stored.
    let link = repo.find_by_code("del001").await.unwrap().unwrap();
    assert!(!link.is_active);
    assert_eq!(link.url, "https://example.com");
}

#[tokio::test]
async fn test_deactivate_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.delete("/delete/nonexistent").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_deactivate_twice() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "del002", "https://example.com").await;

    // First deactivation succeeds.
    server.delete("/delete/del002").await.assert_status_ok();

    // Second reports not found, same as an unknown code.
    server
        .delete("/delete/del002")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_deactivate_then_redirect_and_info() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "del003", "https://example.com").await;

    server.get("/del003").await;
    server.delete("/delete/del003").await.assert_status_ok();

    server.get("/del003").await.assert_status(StatusCode::GONE);

    let info = server.get("/info/del003").await;
    info.assert_status_ok();

    let json = info.json::<serde_json::Value>();
    assert_eq!(json["is_active"], false);
    assert_eq!(json["clicks"], 1);
}
