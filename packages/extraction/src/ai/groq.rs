//! Groq implementation of the completion model.
//!
//! # Example
//!
//! ```rust,ignore
//! use extraction::ai::GroqModel;
//!
//! let model = GroqModel::from_env()?.with_model("gemma-7b-it");
//! let outcome = extraction::summarize(&model, &docs, "topic", &config).await;
//! ```

use async_trait::async_trait;

use groq_client::{ChatRequest, GroqClient, Message};

use crate::error::{ExtractionError, Result};
use crate::traits::completion::CompletionModel;

/// Default Groq model for summarization.
pub const DEFAULT_MODEL: &str = "gemma-7b-it";

/// Groq-backed completion model.
#[derive(Clone)]
pub struct GroqModel {
    client: GroqClient,
    model: String,
}

impl GroqModel {
    /// Create a new Groq model with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: GroqClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create from environment variable `GROQ_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let client =
            GroqClient::from_env().map_err(|e| ExtractionError::Config(e.to_string()))?;
        Ok(Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Set the chat model (default: gemma-7b-it).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionModel for GroqModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model).message(Message::user(prompt));

        let response = self.client.chat_completion(request).await.map_err(|e| {
            if e.is_rate_limit() {
                // Normalize throttling errors so callers matching on the
                // message always see the phrase.
                ExtractionError::Completion(format!("rate limit: {e}").into())
            } else {
                ExtractionError::Completion(Box::new(e))
            }
        })?;

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_builder() {
        let model = GroqModel::new("gsk-test").with_model("llama-3.1-8b-instant");
        assert_eq!(model.model(), "llama-3.1-8b-instant");

        let default_model = GroqModel::new("gsk-test");
        assert_eq!(default_model.model(), DEFAULT_MODEL);
    }
}
