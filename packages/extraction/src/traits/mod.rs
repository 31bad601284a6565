//! Core trait abstractions.

pub mod completion;
pub mod loader;

pub use completion::CompletionModel;
pub use loader::PageLoader;
