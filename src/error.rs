//! Error handling for the application

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::estimator::responses::ErrorResponse;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] JsonRejection),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidPayload(rejection) => rejection.status(),
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::NotFound => "not_found",
            AppError::InvalidPayload(_) => "invalid_payload",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::InvalidPayload(rejection) => {
                let text = rejection.body_text();
                tracing::debug!("Rejected payload: {}", text);
                text
            }
            AppError::NotFound => self.to_string(),
        };

        let body = ErrorResponse {
            error_type: self.error_type().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
