//! LLM Client — the single point of entry for all Cohere API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Cohere API directly.
//! All text generation MUST go through [`GenerationService`].
//!
//! Model: command (hardcoded — do not make configurable to prevent drift)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const COHERE_API_URL: &str = "https://api.cohere.ai/v1/generate";
/// The model used for all generation calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "command";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned no generations")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub generations: Vec<Generation>,
}

#[derive(Debug, Deserialize)]
pub struct Generation {
    pub text: String,
}

impl GenerateResponse {
    /// Extracts the first generation's text, trimmed of surrounding whitespace.
    pub fn text(&self) -> Option<&str> {
        self.generations.first().map(|g| g.text.trim())
    }
}

#[derive(Debug, Deserialize)]
struct CohereError {
    message: String,
}

/// The seam between the pipeline and the hosted generation API.
///
/// The session orchestrator takes `&dyn GenerationService` so tests can
/// substitute a scripted implementation and observe prompts and call order.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError>;
}

/// The single LLM client used by the pipeline.
/// Wraps the Cohere generate API. Requests are not retried: a failed call
/// surfaces as a typed [`LlmError`] and the run aborts.
#[derive(Clone)]
pub struct CohereClient {
    client: Client,
    api_key: String,
}

impl CohereClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl GenerationService for CohereClient {
    async fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: MODEL,
            prompt,
            max_tokens,
            temperature,
        };

        let response = self
            .client
            .post(COHERE_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the structured error message
            let message = serde_json::from_str::<CohereError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let generate_response: GenerateResponse = serde_json::from_str(&body)?;

        let text = generate_response.text().ok_or(LlmError::EmptyContent)?;

        debug!("generation call succeeded: {} chars", text.len());

        Ok(text.to_string())
    }
}
