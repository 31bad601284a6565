//! Content Extraction and Summarization Library
//!
//! Turns user-supplied sources — web URLs, video links, uploaded PDF or
//! plain-text files — into normalized plain-text documents, then
//! produces a topic-focused summary through a hosted completion API,
//! batch by batch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{summarize, Extractor, SourceItem, SummarizeConfig};
//! use extraction::ai::GroqModel;
//!
//! let extractor = Extractor::new();
//! let report = extractor
//!     .extract(&[SourceItem::url("https://example.com/article")])
//!     .await?;
//!
//! let model = GroqModel::from_env()?;
//! let outcome = summarize(
//!     &model,
//!     &report.documents,
//!     "volunteer opportunities",
//!     &SummarizeConfig::default(),
//! )
//! .await;
//! ```
//!
//! # Modules
//!
//! - [`types`] - source items, documents, reports, configuration
//! - [`traits`] - loader and completion-model abstractions
//! - [`loaders`] - web, video-transcript, PDF, and text handlers
//! - [`pipeline`] - extraction dispatch and batch summarization
//! - [`testing`] - mock implementations for testing

pub mod error;
pub mod loaders;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "groq")]
pub mod ai;

// Re-export core types at crate root
pub use error::{ExtractionError, Result};
pub use loaders::{WebPageLoader, YoutubeTranscriptLoader};
pub use pipeline::{format_summarize_prompt, summarize, Extractor, SUMMARIZE_PROMPT};
pub use traits::{CompletionModel, PageLoader};
pub use types::{
    BatchFailure, Document, ExtractionReport, SkipReason, SkippedItem, SourceItem,
    SummarizeConfig, SummarizeOutcome,
};

#[cfg(feature = "groq")]
pub use ai::GroqModel;
