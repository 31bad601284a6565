//! Core data types for extraction and summarization.

pub mod config;
pub mod document;
pub mod report;
pub mod source;

pub use config::SummarizeConfig;
pub use document::Document;
pub use report::{BatchFailure, ExtractionReport, SkipReason, SkippedItem, SummarizeOutcome};
pub use source::SourceItem;
