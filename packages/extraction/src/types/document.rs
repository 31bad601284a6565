//! Document type - normalized extracted plain text.

use std::collections::HashMap;

/// A normalized unit of extracted plain text.
///
/// Created from exactly one source item and never mutated afterwards.
/// Metadata is informational only (video title, page title, origin);
/// the document has no identity beyond its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Extracted plain-text content
    pub content: String,

    /// Source-specific metadata
    pub metadata: HashMap<String, String>,
}

impl Document {
    /// Create a new document from extracted text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata key-value pair.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Check if this document has any non-whitespace content.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Get content length in bytes.
    pub fn content_length(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_builder() {
        let doc = Document::new("Some text").with_metadata("source", "https://example.com");

        assert_eq!(doc.content, "Some text");
        assert_eq!(doc.metadata.get("source").unwrap(), "https://example.com");
        assert!(doc.has_content());
    }

    #[test]
    fn test_has_content_whitespace_only() {
        assert!(!Document::new("   \n\t ").has_content());
        assert!(!Document::new("").has_content());
    }
}
