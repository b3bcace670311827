//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider returning a canned answer.
pub struct MockTextProvider {
    answer: Option<String>,
}

impl MockTextProvider {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
        }
    }

    /// Provider that fails every call, for exercising the error path.
    pub fn failing() -> Self {
        Self { answer: None }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn answer_one_word(&self, _question: &str) -> Result<String, ProviderError> {
        match &self.answer {
            Some(answer) => Ok(answer.clone()),
            None => Err(ProviderError::ApiError(
                "mock provider failure".to_string(),
            )),
        }
    }
}
