//! Store-level errors.

use crate::error::AppError;
use serde_json::json;

/// Errors raised by store backends before they are mapped to [`AppError`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Record {key} is missing field '{field}'")]
    MissingField { key: String, field: &'static str },

    #[error("Record {key} has invalid value {value:?} for field '{field}'")]
    InvalidField {
        key: String,
        field: &'static str,
        value: String,
    },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::internal("Store error", json!({ "reason": e.to_string() }))
    }
}
