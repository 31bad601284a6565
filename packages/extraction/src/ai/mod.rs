//! Completion model implementations backed by hosted providers.

pub mod groq;

pub use groq::GroqModel;
