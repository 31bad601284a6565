//! Extraction and summarization pipeline.
//!
//! One user action flows linearly: source items are dispatched to
//! format-specific loaders ([`extract`]), then the resulting documents
//! are summarized batch by batch against a completion model
//! ([`summarize`]).

pub mod extract;
pub mod prompts;
pub mod summarize;

pub use extract::Extractor;
pub use prompts::{format_summarize_prompt, SUMMARIZE_PROMPT};
pub use summarize::summarize;
