//! PDF text extraction from uploaded bytes.

use tracing::debug;

use crate::error::{ExtractionError, Result};
use crate::types::Document;

/// Extract one document from a PDF byte buffer.
///
/// `pdf-extract` returns the whole document as a single string with a
/// form feed between pages. Pages with no extractable text are dropped;
/// the rest are joined with newlines, in page order.
pub fn extract_pdf(name: &str, bytes: &[u8]) -> Result<Document> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf {
        name: name.to_string(),
        message: e.to_string(),
    })?;

    let content = join_pages(&text);
    debug!(name = %name, content_length = content.len(), "PDF extracted");

    Ok(Document::new(content).with_metadata("source", name))
}

/// Join non-empty pages with newlines, preserving page order.
fn join_pages(text: &str) -> String {
    text.split('\x0C')
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pages_drops_empty_pages() {
        let text = "Page one text\x0C   \x0CPage three text";
        assert_eq!(join_pages(text), "Page one text\nPage three text");
    }

    #[test]
    fn test_join_pages_preserves_order() {
        let text = "alpha\x0Cbeta\x0Cgamma";
        assert_eq!(join_pages(text), "alpha\nbeta\ngamma");
    }

    #[test]
    fn test_join_pages_all_empty() {
        assert_eq!(join_pages("\x0C \x0C\n"), "");
    }

    #[test]
    fn test_extract_pdf_invalid_bytes() {
        let err = extract_pdf("broken.pdf", b"not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf { .. }));
        assert!(err.to_string().contains("broken.pdf"));
    }
}
