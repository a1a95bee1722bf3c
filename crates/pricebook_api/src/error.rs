//! HTTP error mapping.
//!
//! # Responsibility
//! - Convert storage and decoding failures into response status/text pairs.
//!
//! # Invariants
//! - Failure bodies are plain text, never JSON.
//! - Internal detail is logged, not sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use pricebook_core::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Handler-level error mapped onto an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// Unknown or unparseable item id.
    NotFound,
    /// Request body failed decoding; carries the decoder text.
    BadRequest(String),
    /// Unexpected storage failure; detail goes to the log only.
    Internal(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Item not found"),
            Self::BadRequest(message) => write!(f, "{message}"),
            Self::Internal(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ApiError {}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(_) => Self::NotFound,
            RepoError::Db(err) => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Item not found").into_response(),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Internal(detail) => {
                error!("event=storage_error module=api status=error error={detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
