//! Format-specific content loaders.
//!
//! - [`web`] - generic web page fetch + HTML-to-text conversion
//! - [`youtube`] - video transcript extraction
//! - [`pdf`] - PDF text extraction from uploaded bytes
//! - [`text`] - plain-text file decoding

pub mod pdf;
pub mod text;
pub mod web;
pub mod youtube;

pub use web::WebPageLoader;
pub use youtube::YoutubeTranscriptLoader;
