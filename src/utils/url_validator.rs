//! Target URL validation.
//!
//! A target must parse as an absolute URL with an `http` or `https` scheme and
//! a host. Accepted targets are stored in their serialized WHATWG form, so the
//! redirect `Location` header is always ASCII with no control characters.

use url::Url;
use validator::ValidationError;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,
}

/// Validates a URL submitted for shortening and returns its serialized form.
///
/// Rejects dangerous schemes like `javascript:`, `data:` and `file:`.
///
/// Parsing drops ASCII tab and newline characters and percent-encodes
/// non-ASCII path and query bytes; the host is converted to punycode.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparsable input,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`UrlValidationError::MissingHost`] when no host is present.
pub fn validate_url(input: &str) -> Result<String, UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url.into())
}

/// [`validator`] adapter for request bodies; the error message carries the
/// same reason text as [`validate_url`].
pub fn validate_target_url(input: &str) -> Result<(), ValidationError> {
    validate_url(input)
        .map(|_| ())
        .map_err(|e| ValidationError::new("url").with_message(e.to_string().into()))
}

/// Convenience wrapper returning whether `input` passes [`validate_url`].
pub fn is_valid_url(input: &str) -> bool {
    validate_url(input).is_ok()
}
