//! DTOs for link creation and lookup endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(custom(function = "crate::utils::url_validator::validate_target_url"))]
    pub url: String,
}

/// A stored link plus its derived short URL.
///
/// Returned by creation and info lookups. `short_url` is computed from the
/// configured base URL and never stored.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub url: String,
    pub code: String,
    pub clicks: u64,
    pub is_active: bool,
    pub short_url: String,
}

impl LinkResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            url: link.url,
            code: link.code,
            clicks: link.clicks,
            is_active: link.is_active,
            short_url,
        }
    }
}

/// Plain acknowledgement body, e.g. `{"detail": "URL deleted."}`.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_validation() {
        let ok = ShortenRequest {
            url: "https://example.com".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = ShortenRequest {
            url: "not-a-url".to_string(),
        };
        assert!(bad.validate().is_err());

        let ftp = ShortenRequest {
            url: "ftp://example.com/file".to_string(),
        };
        assert!(ftp.validate().is_err());
    }

    #[test]
    fn test_link_response_serialization() {
        let mut link = Link::new("abc1234", "https://example.com");
        link.clicks = 3;

        let response = LinkResponse::new(link, "https://s.example.com/abc1234".to_string());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["code"], "abc1234");
        assert_eq!(json["clicks"], 3);
        assert_eq!(json["is_active"], true);
        assert_eq!(json["short_url"], "https://s.example.com/abc1234");
    }
}
