//! Error responses of the in-memory backend.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match self {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::IdsExhausted => StatusCode::INSUFFICIENT_STORAGE,
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
