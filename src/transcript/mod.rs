//! Transcript fetching.
//!
//! A [`CaptionProvider`] returns the caption segments of a video in the order
//! the provider publishes them; [`fetch_transcript`] flattens them into the
//! single text blob that gets stored and summarized.

mod youtube;

pub use youtube::YoutubeCaptions;

use crate::error::{Result, TldwError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single caption segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionSegment {
    pub text: String,
    /// Start offset in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
}

impl CaptionSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Trait for caption sources.
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    /// Fetch the caption segments for a video.
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<CaptionSegment>>;
}

/// Join caption segments with single spaces, keeping provider order.
pub fn join_segments(segments: &[CaptionSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fetch a video's captions and flatten them into one transcript.
#[instrument(skip(provider))]
pub async fn fetch_transcript(provider: &dyn CaptionProvider, video_id: &str) -> Result<String> {
    let segments = provider.fetch_segments(video_id).await?;

    if segments.is_empty() {
        return Err(TldwError::TranscriptUnavailable {
            video_id: video_id.to_string(),
            reason: "provider returned no caption segments".to_string(),
        });
    }

    debug!("Fetched {} caption segments", segments.len());
    Ok(join_segments(&segments))
}
