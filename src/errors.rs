use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failure taxonomy for the read pipeline. All three are terminal for the
/// request and surface as a 500 with a single `error` string; the detail
/// only goes to the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage error: {detail}")]
    Storage { detail: String },
    #[error("format error: {detail}")]
    Format { detail: String },
    #[error("data shape error: {detail}")]
    Shape { detail: String },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn storage(detail: impl Into<String>) -> Self {
        Self::Storage {
            detail: detail.into(),
        }
    }

    pub fn format(detail: impl Into<String>) -> Self {
        Self::Format {
            detail: detail.into(),
        }
    }

    pub fn shape(detail: impl Into<String>) -> Self {
        Self::Shape {
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (message, detail) = match self {
            Self::Storage { detail } => ("could not read the quotes data file", detail),
            Self::Format { detail } => ("quotes data file is not valid JSON", detail),
            Self::Shape { detail } => (
                "quotes data file does not have the expected structure",
                detail,
            ),
        };

        tracing::error!(error = %detail, "request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
