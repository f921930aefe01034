//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{LinkResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "code": "aZ3kP9q",
///   "clicks": 0,
///   "is_active": true,
///   "short_url": "https://s.example.com/aZ3kP9q"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is invalid.
/// Returns 500 Internal Server Error on store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.create_short_link(payload.url).await?;
    let short_url = state.link_service.short_url(&link.code);

    Ok((StatusCode::CREATED, Json(LinkResponse::new(link, short_url))))
}
