//! Web page loader: HTTP fetch plus HTML-to-text conversion.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{ExtractionError, Result};
use crate::traits::loader::PageLoader;
use crate::types::Document;

/// Fixed browser-identifying User-Agent sent with page fetches.
///
/// Some sites serve an empty shell or a block page to non-browser agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_5_1) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36";

/// Loader for generic web pages.
///
/// Fetches the URL with a browser User-Agent and relaxed TLS
/// verification, then converts the HTML body to readable plain text.
///
/// # Example
///
/// ```rust,ignore
/// use extraction::loaders::WebPageLoader;
///
/// let loader = WebPageLoader::new();
/// let docs = loader.load("https://example.com/article").await?;
/// ```
pub struct WebPageLoader {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for WebPageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl WebPageLoader {
    /// Create a new web page loader with default settings.
    pub fn new() -> Self {
        Self {
            // TLS verification intentionally relaxed; target sites with
            // broken certificate chains are still fetched.
            client: reqwest::Client::builder()
                .danger_accept_invalid_certs(true)
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Convert HTML to readable plain text (simplified).
    fn html_to_text(html: &str) -> String {
        let mut text = html.to_string();

        // Remove scripts and styles
        let script_pattern = regex::Regex::new(r"(?s)<script[^>]*>.*?</script>").unwrap();
        let style_pattern = regex::Regex::new(r"(?s)<style[^>]*>.*?</style>").unwrap();
        text = script_pattern.replace_all(&text, "").to_string();
        text = style_pattern.replace_all(&text, "").to_string();

        // Keep heading structure
        let h1_pattern = regex::Regex::new(r"<h1[^>]*>(.*?)</h1>").unwrap();
        let h2_pattern = regex::Regex::new(r"<h2[^>]*>(.*?)</h2>").unwrap();
        let h3_pattern = regex::Regex::new(r"<h3[^>]*>(.*?)</h3>").unwrap();
        text = h1_pattern.replace_all(&text, "# $1\n").to_string();
        text = h2_pattern.replace_all(&text, "## $1\n").to_string();
        text = h3_pattern.replace_all(&text, "### $1\n").to_string();

        // Paragraphs and line breaks
        let p_pattern = regex::Regex::new(r"<p[^>]*>(.*?)</p>").unwrap();
        let br_pattern = regex::Regex::new(r"<br\s*/?>").unwrap();
        text = p_pattern.replace_all(&text, "$1\n\n").to_string();
        text = br_pattern.replace_all(&text, "\n").to_string();

        // List items
        let li_pattern = regex::Regex::new(r"<li[^>]*>(.*?)</li>").unwrap();
        text = li_pattern.replace_all(&text, "- $1\n").to_string();

        // Remove remaining tags
        let tag_pattern = regex::Regex::new(r"<[^>]+>").unwrap();
        text = tag_pattern.replace_all(&text, "").to_string();

        // Clean up whitespace
        let multi_newline = regex::Regex::new(r"\n{3,}").unwrap();
        text = multi_newline.replace_all(&text, "\n\n").to_string();

        // Decode HTML entities
        text = text
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        text.trim().to_string()
    }

    /// Extract title from HTML.
    fn extract_title(html: &str) -> Option<String> {
        let title_pattern = regex::Regex::new(r"<title[^>]*>(.*?)</title>").ok()?;
        title_pattern
            .captures(html)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

#[async_trait]
impl PageLoader for WebPageLoader {
    async fn load(&self, url: &str) -> Result<Vec<Document>> {
        debug!(url = %url, "Web page fetch starting");

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                ExtractionError::Http(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("HTTP {}", status),
            ))));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ExtractionError::Http(Box::new(e)))?;

        let title = Self::extract_title(&html);
        let content = Self::html_to_text(&html);

        debug!(url = %url, content_length = content.len(), "Web page extracted");

        let mut doc = Document::new(content).with_metadata("source", url);
        if let Some(title) = title {
            doc = doc.with_metadata("title", title);
        }

        Ok(vec![doc])
    }

    fn name(&self) -> &str {
        "web"
    }
}
