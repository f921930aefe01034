#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use link_shortener::application::services::LinkService;
use link_shortener::domain::entities::Link;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use link_shortener::infrastructure::persistence::InMemoryLinkRepository;
use link_shortener::routes::{app_router, router};
use link_shortener::state::AppState;
use link_shortener::utils::code_generator::CodeGenerator;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower_http::normalize_path::NormalizePath;

pub const BASE_URL: &str = "https://s.example.com";

/// Store whose every operation fails, as an unreachable Redis would.
pub struct FailingRepository;

#[async_trait]
impl LinkRepository for FailingRepository {
    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::internal(
            "Store error",
            json!({ "reason": "Connection refused (os error 111) at 10.1.2.3:6379" }),
        ))
    }

    async fn save(&self, _link: &Link) -> Result<(), AppError> {
        Err(AppError::internal("Store error", json!({})))
    }

    async fn record_click(&self, _code: &str) -> Result<Option<u64>, AppError> {
        Err(AppError::internal("Store error", json!({})))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

pub fn create_state(repository: Arc<dyn LinkRepository>) -> AppState {
    let link_service = LinkService::new(repository, CodeGenerator::default(), BASE_URL);
    AppState::new(Arc::new(link_service))
}

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    (create_state(repo.clone()), repo)
}

pub fn create_router(state: AppState) -> Router {
    router(state, Duration::from_secs(5))
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(create_router(state)).unwrap();
    (server, repo)
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, code: &str, url: &str) {
    repo.save(&Link::new(code, url)).await.unwrap();
}

pub async fn create_inactive_link(repo: &InMemoryLinkRepository, code: &str, url: &str) {
    let mut link = Link::new(code, url);
    link.deactivate();
    repo.save(&link).await.unwrap();
}

/// The router as served, trailing-slash normalization included.
pub fn create_app(state: AppState) -> NormalizePath<Router> {
    app_router(state, Duration::from_secs(5))
}
