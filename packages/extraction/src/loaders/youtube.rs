//! YouTube transcript loader.
//!
//! Fetches the watch page, locates the caption track list in the
//! embedded player response, downloads the default track, and strips the
//! timedtext markup into plain text. Metadata enrichment adds the video
//! id, title, and channel author when available.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{ExtractionError, Result};
use crate::traits::loader::PageLoader;
use crate::types::Document;

/// Loader for YouTube video transcripts.
pub struct YoutubeTranscriptLoader {
    client: reqwest::Client,
    include_metadata: bool,
}

impl Default for YoutubeTranscriptLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl YoutubeTranscriptLoader {
    /// Create a new transcript loader with metadata enrichment enabled.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            include_metadata: true,
        }
    }

    /// Enable or disable video metadata enrichment.
    pub fn with_video_info(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Video id from the last `v=` query parameter.
    fn video_id(url: &str) -> Option<&str> {
        let (_, rest) = url.rsplit_once("v=")?;
        let id = rest.split('&').next().unwrap_or(rest);
        (!id.is_empty()).then_some(id)
    }

    /// Find the first caption track URL in the watch-page HTML.
    ///
    /// The player response embeds `"captionTracks":[{"baseUrl":"..."}]`
    /// with ampersands escaped as `\u0026`.
    fn caption_track_url(html: &str) -> Option<String> {
        let tracks_pattern = regex::Regex::new(r#""captionTracks":\s*(\[.*?\])"#).ok()?;
        let raw = tracks_pattern.captures(html)?.get(1)?.as_str();

        let tracks: serde_json::Value = serde_json::from_str(raw).ok()?;
        let base_url = tracks.get(0)?.get("baseUrl")?.as_str()?;

        Some(base_url.replace("\\u0026", "&"))
    }

    /// Pull video title and author out of the player response.
    fn video_details(html: &str) -> (Option<String>, Option<String>) {
        // videoDetails carries "title":"...","lengthSeconds" back to back,
        // which disambiguates the title from other "title" keys on the page.
        let title_pattern =
            regex::Regex::new(r#""title":"((?:\\.|[^"\\])*)","lengthSeconds""#).unwrap();
        let author_pattern = regex::Regex::new(r#""author":"((?:\\.|[^"\\])*)""#).unwrap();

        let title = title_pattern
            .captures(html)
            .and_then(|cap| cap.get(1))
            .map(|m| Self::unescape_json_fragment(m.as_str()));
        let author = author_pattern
            .captures(html)
            .and_then(|cap| cap.get(1))
            .map(|m| Self::unescape_json_fragment(m.as_str()));

        (title, author)
    }

    fn unescape_json_fragment(s: &str) -> String {
        s.replace("\\u0026", "&")
            .replace("\\\"", "\"")
            .replace("\\n", " ")
            .replace("\\\\", "\\")
    }

    /// Join timedtext `<text>` segments into one plain-text transcript.
    fn transcript_text(xml: &str) -> String {
        let segment_pattern = regex::Regex::new(r"(?s)<text[^>]*>(.*?)</text>").unwrap();

        let segments: Vec<String> = segment_pattern
            .captures_iter(xml)
            .filter_map(|cap| cap.get(1))
            .map(|m| {
                // Timedtext double-encodes entities (&amp;#39;).
                m.as_str()
                    .replace("&amp;", "&")
                    .replace("&#39;", "'")
                    .replace("&quot;", "\"")
                    .replace("&lt;", "<")
                    .replace("&gt;", ">")
                    .trim()
                    .to_string()
            })
            .filter(|s| !s.is_empty())
            .collect();

        segments.join(" ")
    }
}

#[async_trait]
impl PageLoader for YoutubeTranscriptLoader {
    async fn load(&self, url: &str) -> Result<Vec<Document>> {
        debug!(url = %url, "Transcript fetch starting");

        let watch_page = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ExtractionError::Http(Box::new(e)))?
            .text()
            .await
            .map_err(|e| ExtractionError::Http(Box::new(e)))?;

        let track_url = Self::caption_track_url(&watch_page).ok_or_else(|| {
            warn!(url = %url, "No caption tracks found");
            ExtractionError::TranscriptUnavailable {
                url: url.to_string(),
            }
        })?;

        let xml = self
            .client
            .get(&track_url)
            .send()
            .await
            .map_err(|e| ExtractionError::Http(Box::new(e)))?
            .text()
            .await
            .map_err(|e| ExtractionError::Http(Box::new(e)))?;

        let content = Self::transcript_text(&xml);
        if content.is_empty() {
            return Err(ExtractionError::TranscriptUnavailable {
                url: url.to_string(),
            });
        }

        debug!(url = %url, content_length = content.len(), "Transcript extracted");

        let mut doc = Document::new(content).with_metadata("source", url);
        if self.include_metadata {
            if let Some(id) = Self::video_id(url) {
                doc = doc.with_metadata("video_id", id);
            }
            let (title, author) = Self::video_details(&watch_page);
            if let Some(title) = title {
                doc = doc.with_metadata("title", title);
            }
            if let Some(author) = author {
                doc = doc.with_metadata("author", author);
            }
        }

        Ok(vec![doc])
    }

    fn name(&self) -> &str {
        "youtube"
    }
}
