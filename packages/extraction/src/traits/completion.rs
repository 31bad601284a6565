//! Completion trait abstracting the hosted LLM endpoint.

use async_trait::async_trait;

use crate::error::Result;

/// A text-completion model.
///
/// Implementations wrap a specific provider and handle request plumbing;
/// the summarization pipeline only needs `prompt in, text out`.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Run one completion request and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
