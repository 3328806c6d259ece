//! # Centralized Error Handling
//!
//! This module provides a unified error handling system for the application.
//! It centralizes error logging and HTTP response generation so handlers can
//! simply return [`AppResult`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::services::calculator::CalculationError;

/// Central application error type that encompasses all possible error conditions.
///
/// Every variant maps to an HTTP status and a JSON body of the form
/// `{"message": "..."}`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("calculation error: {0}")]
    Calculation(#[from] CalculationError),

    #[error("not found: {0}")]
    NotFound(&'static str),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Calculation(e) => {
                warn!(error = %e, "Calculation rejected");
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
        };

        let body = Json(ErrorBody { message });
        (status, body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
