//! CLI command implementations.

mod config;
mod favourites;
mod retrieve;
mod serve;
mod summarize;
mod transcript;

pub use config::run_config;
pub use favourites::{run_favourite, run_favourites};
pub use retrieve::run_retrieve;
pub use serve::run_serve;
pub use summarize::run_summarize;
pub use transcript::run_transcript;

use crate::error::TldwError;
use crate::orchestrator::ItemOutcome;
use crate::youtube_id::{extract_playlist_id, extract_video_id};

use super::Output;

/// Resolve CLI input to a video id.
pub(crate) fn video_id(input: &str) -> crate::Result<String> {
    extract_video_id(input).ok_or_else(|| {
        TldwError::InvalidInput(format!("not a YouTube video ID or URL: {}", input))
    })
}

/// Resolve CLI input to a playlist id.
pub(crate) fn playlist_id(input: &str) -> crate::Result<String> {
    extract_playlist_id(input).ok_or_else(|| {
        TldwError::InvalidInput(format!("not a YouTube playlist ID or URL: {}", input))
    })
}

/// Print a playlist batch and return how many videos failed.
pub(crate) fn print_outcomes(outcomes: &[ItemOutcome]) -> usize {
    let mut failed = 0;
    for outcome in outcomes {
        match &outcome.result {
            Ok(text) => Output::video_item(&outcome.video_id, text),
            Err(e) => {
                failed += 1;
                Output::video_error(&outcome.video_id, &e.to_string());
            }
        }
    }
    failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_video_id_input() {
        assert_eq!(video_id("abc123").unwrap(), "abc123");
        assert_eq!(
            video_id("https://youtu.be/dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );

        let err = video_id("https://example.com/watch").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            err.to_string(),
            "Invalid input: not a YouTube video ID or URL: https://example.com/watch"
        );
    }

    #[test]
    fn test_playlist_id_input() {
        assert_eq!(playlist_id("PLtest123").unwrap(), "PLtest123");

        let err = playlist_id("not a playlist").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
