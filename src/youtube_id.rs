//! Parsing of YouTube video and playlist identifiers from user input.
//!
//! The CLI accepts either bare ids or the common URL forms; the HTTP API takes
//! path parameters verbatim and does not go through here.

use regex::Regex;
use std::sync::LazyLock;

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    // Matches various YouTube URL formats and bare video IDs
    Regex::new(
        r"(?x)
        (?:
            # Full YouTube URLs
            (?:https?://)?
            (?:www\.|m\.)?
            (?:youtube\.com/watch\?(?:.*&)?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/shorts/|youtube\.com/v/)
            ([a-zA-Z0-9_-]{11})
        )
        |
        # Bare video ID; stored ids are not limited to YouTube's 11 characters
        ^([a-zA-Z0-9_-]+)$
    ",
    )
    .expect("Invalid regex")
});

static PLAYLIST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{2,64}$").expect("Invalid regex"));

/// Extract a video ID from a YouTube URL or bare ID.
pub fn extract_video_id(input: &str) -> Option<String> {
    let caps = VIDEO_ID.captures(input.trim())?;

    // Try group 1 (URL format) then group 2 (bare ID)
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Extract a playlist ID from a `list=` URL parameter or a bare ID.
pub fn extract_playlist_id(input: &str) -> Option<String> {
    let input = input.trim();

    if input.contains("://") || input.contains("youtube.com") {
        let with_scheme = if input.contains("://") {
            input.to_string()
        } else {
            format!("https://{}", input)
        };
        let url = url::Url::parse(&with_scheme).ok()?;
        return url
            .query_pairs()
            .find(|(k, _)| k == "list")
            .map(|(_, v)| v.into_owned())
            .filter(|id| PLAYLIST_ID.is_match(id));
    }

    PLAYLIST_ID.is_match(input).then(|| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?list=PLabc&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );

        assert_eq!(extract_video_id("abc123"), Some("abc123".to_string()));

        assert_eq!(extract_video_id("not a video"), None);
        assert_eq!(extract_video_id("https://example.com/abc123"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_extract_playlist_id() {
        assert_eq!(
            extract_playlist_id("https://www.youtube.com/playlist?list=PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf"),
            Some("PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf".to_string())
        );
        assert_eq!(
            extract_playlist_id("youtube.com/watch?v=dQw4w9WgXcQ&list=PLtest123"),
            Some("PLtest123".to_string())
        );
        assert_eq!(
            extract_playlist_id("PLtest123"),
            Some("PLtest123".to_string())
        );

        assert_eq!(extract_playlist_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(extract_playlist_id("not a playlist"), None);
    }
}
