//! Error types for the DeepScan gateway.
//!
//! - [`DetectorError`] - failures talking to the external detection service
//! - [`ConfigError`] - invalid gateway configuration
//! - [`ServerError`] - request-level errors, rendered as `{"error": ...}`
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// =============================================================================
// Detector Errors
// =============================================================================

/// Errors from the upstream detection service.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// Could not reach the service or read its answer.
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    /// The service answered with a non-success status.
    #[error("Detector returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not a usable verdict.
    #[error("Invalid detector response: {0}")]
    InvalidResponse(String),

    /// Confidence was not a probability.
    #[error("Confidence {0} is outside [0, 1]")]
    ConfidenceOutOfRange(f64),
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while assembling [`crate::config::GatewayConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held an unparseable value.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    /// The detector URL is missing.
    #[error("No detector URL configured (set DETECTOR_URL or pass --detector-url)")]
    MissingDetectorUrl,
}

// =============================================================================
// Server Errors
// =============================================================================

/// Request-level errors of the HTTP API.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Malformed multipart body.
    #[error("Multipart error: {0}")]
    Multipart(String),

    /// Upload exceeds the configured body limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// The request carried no `file` field.
    #[error("No file provided")]
    MissingFile,

    /// The uploaded part is neither an image nor a video.
    #[error("Unsupported media type: '{0}'")]
    UnsupportedMediaType(String),

    /// The detection service failed.
    #[error("Detector error: {0}")]
    Detector(#[from] DetectorError),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Multipart(_) | ServerError::MissingFile => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ServerError::Detector(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for detector operations.
pub type DetectorResult<T> = Result<T, DetectorError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let err: ServerError = DetectorError::ConfidenceOutOfRange(1.5).into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ServerError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServerError::UnsupportedMediaType("text/plain".into()).status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn test_status_error_format() {
        let err = DetectorError::Status {
            status: 500,
            message: "model not loaded".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("model not loaded"));
    }
}
