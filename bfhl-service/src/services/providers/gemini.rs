//! Gemini AI provider implementation.
//!
//! One-word answers via Google's Gemini generateContent API.

use super::{ProviderError, TextProvider, FALLBACK_ANSWER};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            GEMINI_API_BASE, self.config.model
        )
    }

    fn build_prompt(question: &str) -> String {
        format!(
            "Answer the following question in exactly ONE WORD only.\nQuestion: {}",
            question
        )
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn answer_one_word(&self, question: &str) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart {
                    text: Self::build_prompt(question),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            question_len = question.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url())
            .header("X-Goog-Api-Key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(extract_answer(&api_response))
    }
}

/// Pull `candidates[0].content.parts[0].text` out of the response, keeping
/// only ASCII letters. A missing path or an answer that strips down to
/// nothing yields the fallback.
fn extract_answer(response: &GenerateContentResponse) -> String {
    let word: String = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.chars().filter(char::is_ascii_alphabetic).collect())
        .unwrap_or_default();

    if word.is_empty() {
        FALLBACK_ANSWER.to_string()
    } else {
        word
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}
