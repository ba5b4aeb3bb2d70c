use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use crate::models::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    UnsupportedMedia(String),
    #[error("Route not found")]
    NotFound,
    /// The inner detail is logged, never sent to the client.
    #[error("Internal server error")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::UnsupportedMedia(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Internal(detail) => log::error!("Internal error: {}", detail),
            ApiError::NotFound => {}
            other => log::warn!("Rejected request: {}", other),
        }

        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            message: self.to_string(),
            status: status.as_u16(),
        })
    }
}

/// Turns malformed or mistyped JSON bodies into the same envelope as every
/// other validation failure.
pub fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(format!("Invalid request body: {}", err)).into()
}
