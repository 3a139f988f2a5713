//! Transcript summarization via an LLM.

mod openai;

pub use openai::OpenAISummarizer;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for summary generation.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a summary of a transcript.
    async fn summarize(&self, transcript: &str) -> Result<String>;
}
