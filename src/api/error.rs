use axum::{Json, http::StatusCode, response::IntoResponse};
use axum::extract::multipart::MultipartError;
use serde_json::json;
use thiserror::Error;

use super::models::ErrorResponse;
use crate::collection::{CollectionError, ParseError};

pub const UNPARSEABLE_MESSAGE: &str =
    "Failed to parse the Collection file. Check if it is a valid specification.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("payload invalid: {0}")]
    InvalidPayload(String),
    #[error("payload too large: limit is {0} bytes")]
    PayloadTooLarge(usize),
    #[error("{msg} ({0})", msg = UNPARSEABLE_MESSAGE)]
    UnparseableCollection(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnparseableCollection(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidPayload(_) => "INVALID_PAYLOAD",
            ApiError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ApiError::UnparseableCollection(_) => "UNPARSEABLE_COLLECTION",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Map a multipart read failure, treating body-limit hits as 413
    pub fn from_multipart(err: MultipartError, limit: usize) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(limit)
        } else {
            ApiError::InvalidPayload(err.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        };

        (status, Json(json!(body))).into_response()
    }
}

impl From<CollectionError> for ApiError {
    fn from(value: CollectionError) -> Self {
        match value {
            CollectionError::Parse(ParseError::MalformedJson(e)) => {
                ApiError::UnparseableCollection(e.to_string())
            }
            CollectionError::Parse(e @ ParseError::SourceUnreadable { .. }) => {
                ApiError::Internal(format!("Error parsing file: {e}"))
            }
            CollectionError::Render(e) => ApiError::Internal(format!("Error rendering summary: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_collection_errors_map_to_status() {
        let malformed: ApiError = CollectionError::Parse(ParseError::MalformedJson(
            serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        ))
        .into();
        assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);
        assert!(malformed.to_string().starts_with(UNPARSEABLE_MESSAGE));

        let unreadable: ApiError = CollectionError::Parse(ParseError::SourceUnreadable {
            path: PathBuf::from("/tmp/gone.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
        .into();
        assert_eq!(unreadable.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(unreadable.code(), "INTERNAL_ERROR");
    }
}
