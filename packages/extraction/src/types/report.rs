//! Result reports for extraction and summarization passes.
//!
//! Failures are collected into explicit values rather than surfaced as
//! side effects, so the calling UI decides how to render them.

/// Outcome of extracting a list of source items.
#[derive(Debug, Default)]
pub struct ExtractionReport {
    /// Documents produced, in source-item input order
    pub documents: Vec<super::Document>,

    /// Items that produced no document, with the reason
    pub skipped: Vec<SkippedItem>,
}

impl ExtractionReport {
    /// Whether no documents were produced at all.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Why a source item produced no document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The URL did not parse as a well-formed http(s) URL
    InvalidUrl,

    /// The loader failed (network error, missing transcript, ...)
    LoadFailed,
}

/// One source item that was skipped during extraction.
#[derive(Debug, Clone)]
pub struct SkippedItem {
    /// The URL or file name of the skipped item
    pub source: String,

    /// Classification of the failure
    pub reason: SkipReason,

    /// User-facing error text
    pub message: String,
}

/// Outcome of the batch summarization pass.
#[derive(Debug)]
pub struct SummarizeOutcome {
    /// Newline-joined batch summaries, or `None` when no batch succeeded
    pub summary: Option<String>,

    /// Batches whose completion call failed (their content is absent
    /// from `summary`)
    pub failures: Vec<BatchFailure>,
}

/// One batch whose completion request failed.
#[derive(Debug, Clone)]
pub struct BatchFailure {
    /// Zero-based batch index
    pub batch: usize,

    /// Whether the failure looked like provider throttling
    pub rate_limited: bool,

    /// User-facing error text
    pub message: String,
}
