//! Source items - user-supplied inputs before extraction.

/// One user-supplied input, tagged by kind.
///
/// Dispatch over source items is exhaustive; there is no catch-all
/// "anything readable" input.
#[derive(Debug, Clone)]
pub enum SourceItem {
    /// A web or video URL.
    Url(String),

    /// An uploaded PDF file.
    Pdf {
        /// File name, used in error reports
        name: String,
        /// Raw PDF bytes
        bytes: Vec<u8>,
    },

    /// An uploaded plain-text file.
    Text {
        /// File name, used in error reports
        name: String,
        /// Raw file bytes (expected UTF-8)
        bytes: Vec<u8>,
    },
}

impl SourceItem {
    /// Create a URL item.
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Create a PDF upload item.
    pub fn pdf(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::Pdf {
            name: name.into(),
            bytes,
        }
    }

    /// Create a text upload item.
    pub fn text(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::Text {
            name: name.into(),
            bytes,
        }
    }

    /// Label shown in user-facing reports (the URL or the file name).
    pub fn label(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Pdf { name, .. } | Self::Text { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(SourceItem::url("https://example.com").label(), "https://example.com");
        assert_eq!(SourceItem::pdf("report.pdf", vec![]).label(), "report.pdf");
        assert_eq!(SourceItem::text("notes.txt", vec![]).label(), "notes.txt");
    }
}
