//! JSON error responses shared by every route.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{OAuthError, PaymentError};

/// Error body: `{"error": "...", "error_code": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    pub error_code: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_code: error_code.into(),
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ValidationFailed | ErrorCode::UpstreamRejected => StatusCode::BAD_REQUEST,
            ErrorCode::MissingDependency | ErrorCode::UpstreamUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn inner(&self) -> &DomainError {
        &self.0
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        Self(err.into())
    }
}

impl From<OAuthError> for ApiError {
    fn from(err: OAuthError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error_code = %self.0.code, details = ?self.0.details, "{}", self.0.message);
        } else {
            tracing::debug!(error_code = %self.0.code, "{}", self.0.message);
        }

        let body = ErrorResponse::new(self.0.code.to_string(), self.0.message);
        (status, Json(body)).into_response()
    }
}
