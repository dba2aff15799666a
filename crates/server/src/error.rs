//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`; bodies are JSON of the form `{"error": message}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clementine_core::SessionIdError;
use serde_json::json;
use thiserror::Error;

use crate::gemini::GeminiError;

/// Application-level error taxonomy.
///
/// `InvalidArgument` and `NotFound` are client errors and never retried.
/// `Unavailable` covers the text-generation capability being unreachable
/// or unconfigured; callers may retry. Anything else from a collaborator
/// surfaces with its underlying message rather than being swallowed.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing/blank sessionId, non-positive qty, empty cart at checkout,
    /// missing orderId.
    #[error("{0}")]
    InvalidArgument(String),

    /// Referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Text-generation call failed.
    #[error(transparent)]
    Gemini(#[from] GeminiError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SessionIdError> for AppError {
    fn from(err: SessionIdError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Gemini(err) if err.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            Self::Gemini(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side errors to Sentry; client errors are noise
        if matches!(self, Self::Gemini(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_client_error_status_codes() {
        assert_eq!(
            get_status(AppError::InvalidArgument("qty must be at least 1".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::NotFound("Product not found: 99".to_string())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_unconfigured_generator_is_service_unavailable() {
        assert_eq!(
            get_status(AppError::Gemini(GeminiError::MissingApiKey)),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_upstream_failures_are_bad_gateway() {
        let err = AppError::Gemini(GeminiError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(get_status(err), StatusCode::BAD_GATEWAY);
        assert_eq!(
            get_status(AppError::Gemini(GeminiError::EmptyReply)),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_internal_message_is_not_exposed() {
        let response = AppError::Internal("secret detail".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_session_id_error_maps_to_invalid_argument() {
        let err: AppError = SessionIdError::Blank.into();
        assert_eq!(err.to_string(), "sessionId is required");
        assert_eq!(get_status(err), StatusCode::BAD_REQUEST);
    }
}
