//! Repository trait for short link records.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Key-value store of [`Link`] records keyed by short code.
///
/// The store itself enforces no uniqueness; callers probe with
/// [`find_by_code`](Self::find_by_code) before writing a new code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisLinkRepository`] - Redis hashes
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if a complete record is stored under `code`
    /// - `Ok(None)` if no record exists
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors, including a record that
    /// is present but incomplete or malformed.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Writes the full record for `link.code`, overwriting any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn save(&self, link: &Link) -> Result<(), AppError>;

    /// Atomically increments the click counter of an active link.
    ///
    /// Returns the new counter value, or `Ok(None)` if the code is unknown or
    /// the link is inactive at the moment of the increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn record_click(&self, code: &str) -> Result<Option<u64>, AppError>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name used in health reports and logs.
    fn backend(&self) -> &'static str;
}
