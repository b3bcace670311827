use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Operation(String),

    #[error("{0}")]
    ExternalService(anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct FailureEnvelope {
            is_success: bool,
            error: String,
        }

        // Every request-level failure maps to 400 with the uniform envelope;
        // only startup-class errors surface as 500.
        let (status, error_message) = match self {
            AppError::Validation(msg) | AppError::Operation(msg) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::ExternalService(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Config(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration error: {}", err),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (
            status,
            Json(FailureEnvelope {
                is_success: false,
                error: error_message,
            }),
        )
            .into_response()
    }
}
