//! HTTP error response conversion
//!
//! Handlers return `Result<Response, HttpAppError>`. Every failure, whether local
//! validation, a malformed form, a transport problem or a vendor rejection, renders
//! as `400 {"message": "Error", "error": {...}}`. Clients get no status-level
//! distinction between causes; the variant only decides how loudly it is logged.

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use boomerang_core::{LogLevel, MediaError};
use serde::Serialize;
use utoipa::ToSchema;

pub const ERROR_MESSAGE: &str = "Error";

/// Normalized error value carried in the `error` field.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    /// Status the vendor answered with, when the vendor rejected the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_code: Option<u16>,
}

impl From<&MediaError> for ErrorBody {
    fn from(err: &MediaError) -> Self {
        Self {
            message: err.client_message(),
            http_code: err.vendor_status(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always "Error"
    pub message: String,
    pub error: ErrorBody,
}

/// Wrapper type for MediaError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for MediaError (external type from boomerang-core)
#[derive(Debug)]
pub struct HttpAppError(pub MediaError);

impl From<MediaError> for HttpAppError {
    fn from(err: MediaError) -> Self {
        HttpAppError(err)
    }
}

impl From<std::io::Error> for HttpAppError {
    fn from(err: std::io::Error) -> Self {
        HttpAppError(MediaError::Io(err))
    }
}

impl From<MultipartError> for HttpAppError {
    fn from(err: MultipartError) -> Self {
        HttpAppError(MediaError::Multipart(err.body_text()))
    }
}

/// Non-multipart or boundary-less bodies fail the same way as a malformed form.
impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        HttpAppError(MediaError::Multipart(rejection.body_text()))
    }
}

impl From<QueryRejection> for HttpAppError {
    fn from(rejection: QueryRejection) -> Self {
        HttpAppError(MediaError::Validation(rejection.body_text()))
    }
}

fn log_error(error: &MediaError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        log_error(&self.0);

        let body = ErrorResponse {
            message: ERROR_MESSAGE.to_string(),
            error: ErrorBody::from(&self.0),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
