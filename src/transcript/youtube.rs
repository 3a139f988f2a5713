//! YouTube caption provider backed by `yt-transcript-rs`.

use super::{CaptionProvider, CaptionSegment};
use crate::error::{Result, TldwError};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Fetches published captions straight from YouTube.
pub struct YoutubeCaptions {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl YoutubeCaptions {
    /// Create a provider that prefers the given caption languages, in order.
    pub fn new(languages: Vec<String>) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            TldwError::Config(format!("Failed to initialize transcript client: {}", e))
        })?;

        let languages = if languages.is_empty() {
            vec!["en".to_string()]
        } else {
            languages
        };

        Ok(Self { api, languages })
    }
}

#[async_trait]
impl CaptionProvider for YoutubeCaptions {
    #[instrument(skip(self))]
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<CaptionSegment>> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let fetched = self
            .api
            .fetch_transcript(video_id, &languages, false)
            .await
            .map_err(|e| {
                warn!("Caption lookup failed for {}: {}", video_id, e);
                TldwError::TranscriptUnavailable {
                    video_id: video_id.to_string(),
                    reason: e.to_string(),
                }
            })?;

        debug!(
            "Fetched {} snippets ({})",
            fetched.snippets.len(),
            fetched.language_code
        );

        Ok(fetched
            .snippets
            .into_iter()
            .map(|s| CaptionSegment::new(s.text, s.start, s.duration))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language() {
        let captions = YoutubeCaptions::new(Vec::new()).unwrap();
        assert_eq!(captions.languages, vec!["en".to_string()]);
    }
}
