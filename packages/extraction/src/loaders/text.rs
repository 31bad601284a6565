//! Plain-text file decoding.

use crate::error::{ExtractionError, Result};
use crate::types::Document;

/// Decode an uploaded text file as UTF-8 into one document.
pub fn extract_text(name: &str, bytes: &[u8]) -> Result<Document> {
    let content =
        String::from_utf8(bytes.to_vec()).map_err(|source| ExtractionError::TextDecode {
            name: name.to_string(),
            source,
        })?;

    Ok(Document::new(content).with_metadata("source", name))
}
