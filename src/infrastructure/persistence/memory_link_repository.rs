//! In-memory link repository.

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use async_trait::async_trait;
use dashmap::DashMap;

/// Process-local implementation of [`LinkRepository`] backed by `DashMap`.
///
/// Used when no Redis is configured and as the store for handler tests.
/// Records do not survive a restart.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    storage: DashMap<String, Link>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, active or not.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.storage.get(code).map(|entry| entry.value().clone()))
    }

    async fn save(&self, link: &Link) -> Result<(), AppError> {
        self.storage.insert(link.code.clone(), link.clone());
        Ok(())
    }

    async fn record_click(&self, code: &str) -> Result<Option<u64>, AppError> {
        // get_mut holds the shard write lock, so check and increment are atomic
        let Some(mut entry) = self.storage.get_mut(code) else {
            return Ok(None);
        };

        if !entry.is_active {
            return Ok(None);
        }

        entry.clicks += 1;
        Ok(Some(entry.clicks))
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_and_find() {
        let repo = InMemoryLinkRepository::new();
        let link = Link::new("abc1234", "https://example.com");

        repo.save(&link).await.unwrap();

        let found = repo.find_by_code("abc1234").await.unwrap();
        assert_eq!(found, Some(link));
    }

    #[tokio::test]
    async fn find_nonexistent() {
        let repo = InMemoryLinkRepository::new();
        assert!(repo.find_by_code("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_whole_record() {
        let repo = InMemoryLinkRepository::new();
        let mut link = Link::new("abc1234", "https://example.com");
        repo.save(&link).await.unwrap();

        link.clicks = 5;
        link.deactivate();
        repo.save(&link).await.unwrap();

        let found = repo.find_by_code("abc1234").await.unwrap().unwrap();
        assert_eq!(found.clicks, 5);
        assert!(!found.is_active);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn record_click_increments_active_link() {
        let repo = InMemoryLinkRepository::new();
        repo.save(&Link::new("abc1234", "https://example.com"))
            .await
            .unwrap();

        assert_eq!(repo.record_click("abc1234").await.unwrap(), Some(1));
        assert_eq!(repo.record_click("abc1234").await.unwrap(), Some(2));

        let found = repo.find_by_code("abc1234").await.unwrap().unwrap();
        assert_eq!(found.clicks, 2);
    }

    #[tokio::test]
    async fn record_click_skips_inactive_link() {
        let repo = InMemoryLinkRepository::new();
        let mut link = Link::new("abc1234", "https://example.com");
        link.deactivate();
        repo.save(&link).await.unwrap();

        assert_eq!(repo.record_click("abc1234").await.unwrap(), None);

        let found = repo.find_by_code("abc1234").await.unwrap().unwrap();
        assert_eq!(found.clicks, 0);
    }

    #[tokio::test]
    async fn record_click_does_not_create_record() {
        let repo = InMemoryLinkRepository::new();

        assert_eq!(repo.record_click("ghost").await.unwrap(), None);
        assert!(repo.is_empty());
    }
}
