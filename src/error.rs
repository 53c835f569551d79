use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors returned by the HTTP handlers
///
/// The display text is what the caller sees in the `error` field. Details
/// carried by the variants are only logged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Year and branch are required fields")]
    Validation(String),

    #[error("Failed to process your request. Please try again.")]
    Internal(String),

    #[error("Method not allowed. Use POST to submit match requests.")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::Internal(_) => "internal_error",
            ApiError::MethodNotAllowed => "method_not_allowed",
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Validation(detail) | ApiError::Internal(detail) => Some(detail.as_str()),
            ApiError::MethodNotAllowed => None,
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        tracing::debug!(code = self.code(), detail = ?self.detail(), "Responding with {}", status);
        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
///
/// A body that cannot be read as a profile is reported like any other
/// internal failure, with the generic message.
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("JSON payload error on {}: {}", req.path(), err);
    ApiError::Internal(err.to_string()).into()
}

/// JSON extractor settings shared by the server and the tests
///
/// Any content type is accepted; only the body decides whether the
/// request is readable.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(handle_json_payload_error)
}
