//! API and startup errors rendered as JSON bodies.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use price_forecast::ForecastError;
use serde_json::json;
use thiserror::Error;

/// Unified error type for service startup and API responses.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request body could not be decoded into a forecast request.
    #[error("rejected: {message}")]
    Rejected { status: StatusCode, message: String },

    /// Request decoded but holds values the forecaster cannot use.
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    #[error("config_error: {0}")]
    Config(String),

    #[error("io_error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, error_str) = match self {
            Self::Rejected { status, message } => (status, message),
            Self::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("config_error:{msg}")),
            Self::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("io_error:{e}")),
        };

        let body = json!({ "error": error_str });
        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<ForecastError> for ServiceError {
    fn from(e: ForecastError) -> Self {
        match e {
            ForecastError::ValidationError(msg) => Self::Unprocessable(msg),
            ForecastError::InvalidParameter(msg) => Self::Config(msg),
        }
    }
}
