//! API error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No converter installation is configured on this deployment.
    #[error("converter not configured")]
    ConverterUnavailable,

    /// The converter ran and failed; carries its stderr.
    #[error("converter failed: {stderr}")]
    ConverterFailed { code: Option<i32>, stderr: String },

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ConverterUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::ConverterFailed { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ConverterUnavailable => "CONVERTER_UNAVAILABLE",
            ApiError::ConverterFailed { .. } => "CONVERTER_FAILED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<gedparity_bridge::BridgeError> for ApiError {
    fn from(err: gedparity_bridge::BridgeError) -> Self {
        match err {
            gedparity_bridge::BridgeError::BinaryNotFound(_) => ApiError::ConverterUnavailable,
            gedparity_bridge::BridgeError::CommandFailed { code, stderr } => {
                ApiError::ConverterFailed { code, stderr }
            }
            gedparity_bridge::BridgeError::Spawn(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_failure_maps_to_bad_gateway() {
        let err: ApiError = gedparity_bridge::BridgeError::CommandFailed {
            code: Some(2),
            stderr: "base not found".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("base not found"));
    }

    #[test]
    fn missing_binary_maps_to_service_unavailable() {
        let err: ApiError =
            gedparity_bridge::BridgeError::BinaryNotFound("gwb2ged".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
