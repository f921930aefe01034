//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service layer returns [`AppError`]. Handlers
//! propagate it with `?` and axum renders it through [`IntoResponse`].
//!
//! Internal errors carry diagnostic details for the logs only; the client
//! always receives a fixed, detail-free message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Message returned to clients for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Oops, something went wrong, try again later.";

/// Message returned for every rejected target URL.
pub const INVALID_URL_MESSAGE: &str = "The provided URL is not valid.";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload rendered inside the `{"error": ...}` envelope.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed client input (e.g. an invalid URL at creation).
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// The short code is unknown (or, for deactivation, already inactive).
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// The short code exists but has been deactivated.
    #[error("{message}")]
    Inactive { message: String, details: Value },
    /// Store failure or any other unexpected condition.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn inactive(message: impl Into<String>, details: Value) -> Self {
        Self::Inactive {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Inactive { .. } => StatusCode::GONE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its client-facing payload.
    ///
    /// Internal errors are stripped of their message and details here, so
    /// callers can never leak diagnostics by accident.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Inactive { message, details } => ErrorInfo {
                code: "inactive",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Internal { .. } => ErrorInfo {
                code: "internal_error",
                message: INTERNAL_ERROR_MESSAGE.to_string(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message, details } = &self {
            tracing::error!(%message, %details, "Internal error");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

/// Request body rejections share the `{"reason": ...}` details of
/// service-level URL validation.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let reason = errors
            .field_errors()
            .values()
            .flat_map(|field| field.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());

        AppError::bad_request(INVALID_URL_MESSAGE, json!({ "reason": reason }))
    }
}

pub fn map_redis_error(e: redis::RedisError) -> AppError {
    AppError::internal(
        "Store error",
        json!({ "kind": format!("{:?}", e.kind()), "reason": e.to_string() }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::inactive("x", json!({})).status_code(),
            StatusCode::GONE
        );
        assert_eq!(
            AppError::internal("x", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_info_hides_details() {
        let err = AppError::internal(
            "Store error",
            json!({ "reason": "connection refused at 10.0.0.5:6379" }),
        );

        let info = err.to_error_info();
        assert_eq!(info.code, "internal_error");
        assert_eq!(info.message, INTERNAL_ERROR_MESSAGE);
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_not_found_error_info_keeps_details() {
        let err = AppError::not_found("Short link not found", json!({ "code": "abc1234" }));

        let info = err.to_error_info();
        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Short link not found");
        assert_eq!(info.details["code"], "abc1234");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::inactive("This shortened URL is not active.", json!({}));
        assert_eq!(err.to_string(), "This shortened URL is not active.");
    }

    #[test]
    fn test_validation_errors_use_reason_details() {
        let mut errors = validator::ValidationErrors::new();
        errors.add(
            "url",
            validator::ValidationError::new("url").with_message("Invalid URL format".into()),
        );

        let info = AppError::from(errors).to_error_info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, INVALID_URL_MESSAGE);
        assert_eq!(info.details, json!({ "reason": "Invalid URL format" }));
    }
}
