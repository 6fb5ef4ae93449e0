//! Uniform response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::config::NOT_AVAILABLE;
use crate::errors::{AppError, AppResult};

/// Every operation outcome, success or failure, in one shape:
/// `{status, message, error, data}`. The HTTP status mirrors `status`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    pub error: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// 200 envelope carrying a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: message.into(),
            error: NOT_AVAILABLE.to_string(),
            data: Some(data),
        }
    }

    /// Failure envelope built from the business-layer error.
    pub fn failure(err: &AppError) -> Self {
        Self {
            status: err.status().as_u16(),
            message: err.message().to_string(),
            error: err.detail(),
            data: None,
        }
    }

    /// Fold an operation result into an envelope.
    pub fn respond(result: AppResult<T>, message: &str) -> Self {
        match result {
            Ok(data) => Self::ok(message, data),
            Err(err) => {
                tracing::debug!(status = err.status().as_u16(), error = %err, "operation failed");
                Self::failure(&err)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code().is_success()
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T> From<AppError> for Envelope<T> {
    fn from(err: AppError) -> Self {
        Self::failure(&err)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
