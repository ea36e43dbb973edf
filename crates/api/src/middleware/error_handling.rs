//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the ebe API.
//! It maps domain-specific errors to appropriate HTTP status codes and JSON
//! error responses, ensuring a consistent error handling experience across
//! the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with ebe's custom error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ebe_core::errors::EbeError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `EbeError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub EbeError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body. Storage
/// failures are logged server-side and surfaced with an opaque message so
/// storage details never leak to clients.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            EbeError::NotFound(_) => StatusCode::NOT_FOUND,
            EbeError::Validation(_) => StatusCode::BAD_REQUEST,
            EbeError::Authentication(_) => StatusCode::UNAUTHORIZED,
            EbeError::Authorization(_) => StatusCode::FORBIDDEN,
            EbeError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            EbeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Opaque body for server-side failures, detailed body otherwise
        let message = match &self.0 {
            EbeError::Database(report) => {
                tracing::error!("Database error: {:#}", report);
                "Internal server error".to_string()
            }
            EbeError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from EbeError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, EbeError>` in handler functions that return `Result<T, AppError>`.
impl From<EbeError> for AppError {
    fn from(err: EbeError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, eyre::Report>` in handler functions that return
/// `Result<T, AppError>`. It wraps the eyre error in an `EbeError::Database`
/// variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(EbeError::Database(err))
    }
}

/// Maps an EbeError to an HTTP response
///
/// This function is provided for code that directly maps errors outside of
/// a handler's `?` chain.
pub fn map_error(err: EbeError) -> Response {
    AppError(err).into_response()
}
