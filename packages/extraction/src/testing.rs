//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the extraction
//! library without making real network or LLM calls.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{ExtractionError, Result};
use crate::traits::{completion::CompletionModel, loader::PageLoader};
use crate::types::Document;

/// A mock page loader for testing.
///
/// Returns scripted documents or failures per URL. Calls are recorded
/// for assertions.
#[derive(Clone)]
pub struct MockLoader {
    name: String,
    documents: Arc<RwLock<HashMap<String, Vec<Document>>>>,
    failures: Arc<RwLock<HashMap<String, String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockLoader {
    /// Create a new mock loader.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: Arc::new(RwLock::new(HashMap::new())),
            failures: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Script a document for a URL.
    pub fn with_document(self, url: impl Into<String>, document: Document) -> Self {
        self.documents
            .write()
            .unwrap()
            .entry(url.into())
            .or_default()
            .push(document);
        self
    }

    /// Script a failure for a URL.
    pub fn with_failure(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures
            .write()
            .unwrap()
            .insert(url.into(), message.into());
        self
    }

    /// URLs this loader was asked to load, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PageLoader for MockLoader {
    async fn load(&self, url: &str) -> Result<Vec<Document>> {
        self.calls.write().unwrap().push(url.to_string());

        if let Some(message) = self.failures.read().unwrap().get(url) {
            return Err(ExtractionError::Http(message.clone().into()));
        }

        if let Some(docs) = self.documents.read().unwrap().get(url) {
            return Ok(docs.clone());
        }

        Ok(vec![Document::new(format!("mock content for {url}"))])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A mock completion model for testing.
///
/// Scripted responses and failures are consumed in order; once the
/// script runs out, a default response is returned. Prompts are
/// recorded for assertions.
#[derive(Clone)]
pub struct MockCompletion {
    script: Arc<RwLock<VecDeque<std::result::Result<String, String>>>>,
    default_response: String,
    calls: Arc<RwLock<Vec<String>>>,
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompletion {
    /// Create a new mock completion model.
    pub fn new() -> Self {
        Self {
            script: Arc::new(RwLock::new(VecDeque::new())),
            default_response: "mock summary".to_string(),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append a scripted successful response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.script.write().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Append a scripted failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.script.write().unwrap().push_back(Err(message.into()));
        self
    }

    /// Prompts received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of completion requests made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl CompletionModel for MockCompletion {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.write().unwrap().push(prompt.to_string());

        match self.script.write().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(ExtractionError::Completion(message.into())),
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_loader_scripted_and_default() {
        let loader = MockLoader::new("mock")
            .with_document("https://a.example", Document::new("scripted"));

        let scripted = loader.load("https://a.example").await.unwrap();
        assert_eq!(scripted[0].content, "scripted");

        let fallback = loader.load("https://b.example").await.unwrap();
        assert!(fallback[0].content.contains("https://b.example"));

        assert_eq!(loader.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_completion_script_order() {
        let model = MockCompletion::new()
            .with_response("one")
            .with_failure("down");

        assert_eq!(model.complete("p1").await.unwrap(), "one");
        assert!(model.complete("p2").await.is_err());
        assert_eq!(model.complete("p3").await.unwrap(), "mock summary");
        assert_eq!(model.call_count(), 3);
    }
}
