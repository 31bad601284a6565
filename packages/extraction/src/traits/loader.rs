//! Loader trait for URL-based content sources.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Document;

/// Loads normalized documents from a single URL.
///
/// Implementations fetch one kind of source (a web page, a video
/// transcript) and produce plain-text documents. A loader owns its own
/// HTTP client; nothing is shared across calls.
#[async_trait]
pub trait PageLoader: Send + Sync {
    /// Fetch and normalize the content behind `url`.
    ///
    /// Returns one document per extracted unit. An error means this URL
    /// produced nothing; callers decide whether that is fatal.
    async fn load(&self, url: &str) -> Result<Vec<Document>>;

    /// Loader name for diagnostics.
    fn name(&self) -> &str;
}
