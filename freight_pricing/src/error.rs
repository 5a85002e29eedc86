//! Error types for the pricing engine and its HTTP surface.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by the calculators.
///
/// Every variant indicates an integration defect in the caller (a value
/// outside a closed enumeration), never a user-input edge case; numeric
/// input is clamped and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("unknown usage frequency '{0}', expected one of: high, medium, low")]
    UnknownFrequency(String),
    #[error("unknown daily email bucket '{0}', expected one of: <10, 10-50, 50-200, >200")]
    UnknownBucket(String),
    #[error("unknown model type '{0}', expected one of: standard, advanced, enterprise")]
    UnknownModelType(String),
    #[error("unknown language '{0}', expected one of: zh, en")]
    UnknownLanguage(String),
}

/// Application error returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Pricing(#[from] PricingError),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Pricing(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Pricing(PricingError::UnknownFrequency(_)) => "unknown_frequency",
            Self::Pricing(PricingError::UnknownBucket(_)) => "unknown_bucket",
            Self::Pricing(PricingError::UnknownModelType(_)) => "unknown_model_type",
            Self::Pricing(PricingError::UnknownLanguage(_)) => "unknown_language",
            Self::InvalidBody(_) => "invalid_body",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "type": self.type_name(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}
