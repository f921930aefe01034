//! Handlers for link lookup and deactivation.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::shorten::{DetailResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link's stored record, including deactivated links.
///
/// # Endpoint
///
/// `GET /info/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn link_info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_info(&code).await?;
    let short_url = state.link_service.short_url(&link.code);

    Ok(Json(LinkResponse::new(link, short_url)))
}

/// Deactivates (soft-deletes) a short link.
///
/// # Endpoint
///
/// `DELETE /delete/{code}`
///
/// # Behavior
///
/// - The record is **not** removed; `is_active` is set to false.
/// - Subsequent redirects for this code return **410 Gone**.
/// - Info lookups keep working and report `is_active: false`.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist or is already inactive.
pub async fn deactivate_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DetailResponse>, AppError> {
    state.link_service.deactivate(&code).await?;

    Ok(Json(DetailResponse::new("URL deleted.")))
}
