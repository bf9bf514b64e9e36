/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// First structural mismatch found while checking a response against its schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{resource}: expected {expected} at {path}, got {actual}")]
pub struct SchemaValidationError {
    pub resource: String,
    /// JSON path of the offending value, e.g. `$[3].cores[0].reused`
    pub path: String,
    pub expected: String,
    pub actual: String,
}

/// Failure of a single fetch attempt against the upstream API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error: {status} {status_text}")]
    Http { status: u16, status_text: String },
    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid data received from API: {0}")]
    Schema(#[from] SchemaValidationError),
}

impl FetchError {
    /// Stable machine-readable code for this failure
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "TRANSPORT_ERROR",
            FetchError::Http { .. } => "HTTP_ERROR",
            FetchError::Decode(_) => "DECODE_ERROR",
            FetchError::Schema(_) => "SCHEMA_ERROR",
        }
    }

    /// Upstream HTTP status, when the failure carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Unified error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl From<&FetchError> for ErrorDetail {
    fn from(err: &FetchError) -> Self {
        let code = match err.status() {
            Some(403) => "UPSTREAM_403",
            Some(404) => "UPSTREAM_404",
            Some(429) => "UPSTREAM_429",
            Some(500..=599) => "UPSTREAM_5XX",
            _ => err.kind(),
        };
        Self {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Upstream error: {0}")]
    Upstream(Arc<FetchError>),
}

impl From<Arc<FetchError>> for ApiError {
    fn from(err: Arc<FetchError>) -> Self {
        ApiError::Upstream(err)
    }
}

impl ApiError {
    pub fn detail(&self) -> ErrorDetail {
        match self {
            ApiError::NotFound(msg) => ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message: msg.clone(),
            },
            ApiError::InvalidInput(msg) => ErrorDetail {
                code: "INVALID_INPUT".to_string(),
                message: msg.clone(),
            },
            ApiError::Upstream(err) => ErrorDetail::from(err.as_ref()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_response = ErrorResponse {
            ok: false,
            error: self.detail(),
        };

        // Always HTTP 200 with ok=false; clients branch on the body
        (StatusCode::OK, Json(error_response)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
