//! Source item extraction: dispatch each item to its format handler.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::Result;
use crate::loaders::{self, WebPageLoader, YoutubeTranscriptLoader};
use crate::traits::loader::PageLoader;
use crate::types::{ExtractionReport, SkipReason, SkippedItem, SourceItem};

/// Host fragment that routes a URL to transcript extraction.
const VIDEO_HOST_FRAGMENT: &str = "youtube.com";

/// Dispatches source items to format-specific loaders.
///
/// URL items go through the configured [`PageLoader`]s; failures there
/// are recorded per item and extraction continues. PDF and text items
/// are decoded inline; a failure there aborts the whole pass.
///
/// # Example
///
/// ```rust,ignore
/// use extraction::{Extractor, SourceItem};
///
/// let extractor = Extractor::new();
/// let report = extractor
///     .extract(&[SourceItem::url("https://example.com")])
///     .await?;
/// println!("{} documents", report.documents.len());
/// ```
pub struct Extractor {
    web: Arc<dyn PageLoader>,
    video: Arc<dyn PageLoader>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Create an extractor with the default web and video loaders.
    pub fn new() -> Self {
        Self {
            web: Arc::new(WebPageLoader::new()),
            video: Arc::new(YoutubeTranscriptLoader::new()),
        }
    }

    /// Create an extractor with custom loaders (used in tests).
    pub fn with_loaders(web: Arc<dyn PageLoader>, video: Arc<dyn PageLoader>) -> Self {
        Self { web, video }
    }

    /// Whether a URL parses as an absolute http(s) URL with a host.
    fn is_well_formed(url: &str) -> bool {
        url::Url::parse(url)
            .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
            .unwrap_or(false)
    }

    /// Extract documents from all source items, in input order.
    ///
    /// Returns `Err` only for PDF parse and text decode failures; every
    /// URL-side failure lands in the report's `skipped` list instead.
    pub async fn extract(&self, items: &[SourceItem]) -> Result<ExtractionReport> {
        let mut report = ExtractionReport::default();

        for item in items {
            match item {
                SourceItem::Url(url) => {
                    let loader = if url.contains(VIDEO_HOST_FRAGMENT) {
                        &self.video
                    } else if Self::is_well_formed(url) {
                        &self.web
                    } else {
                        warn!(url = %url, "Invalid URL, skipping");
                        report.skipped.push(SkippedItem {
                            source: url.clone(),
                            reason: SkipReason::InvalidUrl,
                            message: format!("Invalid URL: {url}"),
                        });
                        continue;
                    };

                    match loader.load(url).await {
                        Ok(docs) => report.documents.extend(docs),
                        Err(e) => {
                            warn!(url = %url, loader = loader.name(), error = %e, "Failed to load URL");
                            report.skipped.push(SkippedItem {
                                source: url.clone(),
                                reason: SkipReason::LoadFailed,
                                message: e.to_string(),
                            });
                        }
                    }
                }
                // Decode failures below abort the whole pass, unlike the
                // per-item skip on the URL path.
                SourceItem::Pdf { name, bytes } => {
                    report.documents.push(loaders::pdf::extract_pdf(name, bytes)?);
                }
                SourceItem::Text { name, bytes } => {
                    report.documents.push(loaders::text::extract_text(name, bytes)?);
                }
            }
        }

        info!(
            documents = report.documents.len(),
            skipped = report.skipped.len(),
            "Extraction completed"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockLoader;
    use crate::types::Document;

    fn extractor_with(web: MockLoader, video: MockLoader) -> Extractor {
        Extractor::with_loaders(Arc::new(web), Arc::new(video))
    }

    #[test]
    fn test_is_well_formed() {
        assert!(Extractor::is_well_formed("https://example.com/page"));
        assert!(Extractor::is_well_formed("http://example.com"));
        assert!(!Extractor::is_well_formed("not a url"));
        assert!(!Extractor::is_well_formed("ftp://example.com"));
        assert!(!Extractor::is_well_formed("example.com/page"));
    }

    #[tokio::test]
    async fn test_extract_preserves_input_order() {
        let web = MockLoader::new("web")
            .with_document("https://a.example", Document::new("doc a"))
            .with_document("https://b.example", Document::new("doc b"));
        let extractor = extractor_with(web, MockLoader::new("youtube"));

        let report = extractor
            .extract(&[
                SourceItem::url("https://a.example"),
                SourceItem::url("https://b.example"),
            ])
            .await
            .unwrap();

        let contents: Vec<_> = report.documents.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["doc a", "doc b"]);
        assert!(report.skipped.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_url_skipped_not_fatal() {
        let web = MockLoader::new("web").with_document("https://ok.example", Document::new("ok"));
        let extractor = extractor_with(web, MockLoader::new("youtube"));

        let report = extractor
            .extract(&[
                SourceItem::url("definitely not a url"),
                SourceItem::url("https://ok.example"),
            ])
            .await
            .unwrap();

        assert_eq!(report.documents.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].reason, SkipReason::InvalidUrl);
        assert!(report.skipped[0].message.contains("definitely not a url"));
    }

    #[tokio::test]
    async fn test_loader_failure_skipped_not_fatal() {
        let web = MockLoader::new("web")
            .with_failure("https://down.example", "connection refused")
            .with_document("https://ok.example", Document::new("ok"));
        let extractor = extractor_with(web, MockLoader::new("youtube"));

        let report = extractor
            .extract(&[
                SourceItem::url("https://down.example"),
                SourceItem::url("https://ok.example"),
            ])
            .await
            .unwrap();

        assert_eq!(report.documents.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].reason, SkipReason::LoadFailed);
    }

    #[tokio::test]
    async fn test_video_urls_routed_by_host_fragment() {
        let web = MockLoader::new("web");
        let video = MockLoader::new("youtube")
            .with_document("https://www.youtube.com/watch?v=abc", Document::new("transcript"));
        let video_calls = video.clone();
        let web_calls = web.clone();
        let extractor = extractor_with(web, video);

        let report = extractor
            .extract(&[SourceItem::url("https://www.youtube.com/watch?v=abc")])
            .await
            .unwrap();

        assert_eq!(report.documents[0].content, "transcript");
        assert_eq!(video_calls.calls().len(), 1);
        assert!(web_calls.calls().is_empty());
    }

    #[tokio::test]
    async fn test_text_decode_error_aborts() {
        let extractor = extractor_with(MockLoader::new("web"), MockLoader::new("youtube"));

        let result = extractor
            .extract(&[
                SourceItem::text("good.txt", b"fine".to_vec()),
                SourceItem::text("bad.txt", vec![0xff, 0xfe]),
            ])
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_text_and_pdf_items_produce_documents() {
        let extractor = extractor_with(MockLoader::new("web"), MockLoader::new("youtube"));

        let report = extractor
            .extract(&[SourceItem::text("notes.txt", b"Beta beta beta.".to_vec())])
            .await
            .unwrap();

        assert_eq!(report.documents.len(), 1);
        assert_eq!(report.documents[0].content, "Beta beta beta.");
    }
}
