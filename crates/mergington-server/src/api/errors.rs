//! Error handling for the Mergington Server API
//!
//! Every failure is rendered as `{"detail": <reason>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mergington_core::ErrorKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ServerError;

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-stable reason string
    pub detail: String,
}

/// API Error type for returning standard error responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400)
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// Not found (404)
    #[error("Not Found: {0}")]
    NotFound(String),
    /// Method not allowed on a known path (405)
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    /// Wrapped server error
    #[error("Server Error: {0}")]
    ServerError(#[from] ServerError),
}

impl From<mergington_core::CoreError> for ApiError {
    fn from(err: mergington_core::CoreError) -> Self {
        ApiError::ServerError(ServerError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
            }
            ApiError::ServerError(err) => return api_error_response(&err),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Status code for a server error
pub fn status_for(err: &ServerError) -> StatusCode {
    match err {
        ServerError::Directory(core) => match core.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        },
        ServerError::ConfigError(_) | ServerError::InternalError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Convert a server error into a `{"detail": ...}` response
pub fn api_error_response(err: &ServerError) -> Response {
    let status = status_for(err);
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    }

    (
        status,
        Json(ErrorBody {
            detail: err.to_string(),
        }),
    )
        .into_response()
}
