//! REST client errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by a [`FoodBackend`](crate::api::FoodBackend).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout or protocol failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot address the `/foods` resource.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Status code of a rejected call, if the backend answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Result type for REST calls.
pub type ApiResult<T> = Result<T, ApiError>;
