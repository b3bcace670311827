//! AI provider abstraction.
//!
//! Trait seam over the one-word question backend, so the Gemini
//! implementation can be swapped for a mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::ExternalService(anyhow::Error::new(err))
    }
}

/// Answer used when the model response is missing or unusable.
pub const FALLBACK_ANSWER: &str = "Unknown";

/// Trait for one-word question-answering backends.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Ask the backend for a one-word answer to `question`.
    ///
    /// Implementations strip the raw answer down to alphabetic characters
    /// and return [`FALLBACK_ANSWER`] when no usable text comes back.
    async fn answer_one_word(&self, question: &str) -> Result<String, ProviderError>;
}
