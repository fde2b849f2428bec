//! API error types.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use unface_models::PayloadError;

use crate::services::ClassifyError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Image is required")]
    ImageRequired,

    #[error("Invalid image encoding")]
    InvalidImage(String),

    #[error("Invalid request body")]
    InvalidBody { status: StatusCode, details: String },

    #[error("No face detected in image")]
    NoFaceDetected,

    #[error("Age range not available")]
    AgeRangeUnavailable,

    #[error("Failed to detect age")]
    DetectionFailed(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ImageRequired | ApiError::InvalidImage(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody { status, .. } => *status,
            ApiError::NoFaceDetected => StatusCode::NOT_FOUND,
            ApiError::AgeRangeUnavailable | ApiError::DetectionFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            ApiError::InvalidImage(details)
            | ApiError::InvalidBody { details, .. }
            | ApiError::DetectionFailed(details) => Some(details.clone()),
            _ => None,
        }
    }
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::Empty => ApiError::ImageRequired,
            PayloadError::InvalidEncoding(e) => ApiError::InvalidImage(e.to_string()),
        }
    }
}

impl From<ClassifyError> for ApiError {
    fn from(err: ClassifyError) -> Self {
        match err {
            ClassifyError::NoFaceDetected => ApiError::NoFaceDetected,
            ClassifyError::AgeRangeUnavailable => ApiError::AgeRangeUnavailable,
            ClassifyError::Detection(e) => ApiError::DetectionFailed(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match &rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                StatusCode::BAD_REQUEST
            }
            other => other.status(),
        };
        ApiError::InvalidBody {
            status,
            details: rejection.body_text(),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            details: self.details(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
