use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire-facing error payload.
///
/// Produced fresh for every failure and never persisted. The `code` is the
/// catalog-resolved numeric error code for classified failures, or the
/// request's status code for validation failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Numeric status/error code
    pub code: i32,
    /// Localized human-readable message
    pub message: String,
    /// When this payload was produced
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
