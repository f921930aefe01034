//! Short link creation, redirect, lookup and deactivation.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, INVALID_URL_MESSAGE};
use crate::utils::code_generator::{CodeGenerator, is_reserved};
use crate::utils::url_validator::validate_url;
use serde_json::json;
use tracing::{Instrument, debug, info, info_span, instrument, warn};

/// Collision retries used when none is configured.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

const NOT_FOUND_MESSAGE: &str = "The original URL for the shortened URL provided was not found.";
const INACTIVE_MESSAGE: &str = "This shortened URL is not active.";

/// Service orchestrating the short link lifecycle.
///
/// Every operation is a read-modify-write against the [`LinkRepository`]; the
/// service keeps no mutable state of its own and is shared across requests
/// behind an `Arc`.
pub struct LinkService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
    generator: CodeGenerator,
    base_url: String,
    max_attempts: usize,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin used to build display short URLs; a
    /// trailing slash is ignored.
    pub fn new(repository: Arc<R>, generator: CodeGenerator, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            generator,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the collision retry budget. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Creates a short link for `url`.
    ///
    /// The target is stored in its serialized form (see
    /// [`validate_url`]), which may differ from the submitted string.
    ///
    /// # Code Generation
    ///
    /// Draws codes until one is neither stored nor reserved, up to the
    /// configured attempt budget.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid; the store is not
    /// touched in that case.
    ///
    /// Returns [`AppError::Internal`] if no free code was found within the
    /// attempt budget or the store fails.
    #[instrument(skip(self))]
    pub async fn create_short_link(&self, url: String) -> Result<Link, AppError> {
        let url = info_span!("input_validation").in_scope(|| {
            validate_url(&url).map_err(|e| {
                AppError::bad_request(INVALID_URL_MESSAGE, json!({ "reason": e.to_string() }))
            })
        })?;

        let code = self
            .generate_unique_code()
            .instrument(info_span!("code_generation"))
            .await?;

        let link = Link::new(code, url);

        self.repository
            .save(&link)
            .instrument(info_span!("store_save", code = %link.code))
            .await?;

        info!(code = %link.code, "Short link created");
        Ok(link)
    }

    /// Resolves `code` to its target URL and counts the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never created.
    /// Returns [`AppError::Inactive`] if the link has been deactivated,
    /// including a deactivation racing with this call.
    /// Returns [`AppError::Internal`] on store errors.
    #[instrument(skip(self))]
    pub async fn redirect(&self, code: &str) -> Result<String, AppError> {
        let link = self.get_info(code).await?;

        if !link.is_active {
            return Err(Self::inactive(code));
        }

        match self.repository.record_click(code).await? {
            Some(clicks) => {
                debug!(code, clicks, "Click recorded");
                Ok(link.url)
            }
            None => Err(Self::inactive(code)),
        }
    }

    /// Retrieves a link by its short code, active or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_info(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE, json!({ "code": code })))
    }

    /// Deactivates (soft-deletes) a link.
    ///
    /// Deactivating an already inactive link reports [`AppError::NotFound`],
    /// exactly like an unknown code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or inactive.
    /// Returns [`AppError::Internal`] on store errors.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, code: &str) -> Result<(), AppError> {
        let mut link = match self.repository.find_by_code(code).await? {
            Some(link) if link.is_active => link,
            _ => {
                return Err(AppError::not_found(
                    NOT_FOUND_MESSAGE,
                    json!({ "code": code }),
                ));
            }
        };

        link.deactivate();
        self.repository.save(&link).await?;

        info!(code, "Short link deactivated");
        Ok(())
    }

    /// Constructs the display short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Reports whether the underlying store is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }

    /// Name of the store backend in use.
    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }

    /// Generates a code that is neither stored nor reserved.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            if is_reserved(&code) {
                debug!(attempt, code = %code, "Generated reserved code, retrying");
                continue;
            }

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }

            debug!(attempt, code = %code, "Short code collision, retrying");
        }

        warn!(
            attempts = self.max_attempts,
            "Could not find a free short code"
        );

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }

    fn inactive(code: &str) -> AppError {
        AppError::inactive(INACTIVE_MESSAGE, json!({ "code": code }))
    }
}
