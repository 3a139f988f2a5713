//! Playlist resolution: playlist id to member video ids.

mod youtube;

pub use youtube::YoutubeDataApi;

use crate::error::Result;
use async_trait::async_trait;

/// Number of items requested from the playlist API.
///
/// Only one page is ever requested, so playlists longer than this are
/// truncated to their first `PLAYLIST_PAGE_SIZE` videos.
pub const PLAYLIST_PAGE_SIZE: usize = 50;

/// Trait for playlist lookups.
#[async_trait]
pub trait PlaylistResolver: Send + Sync {
    /// List the video ids of a playlist, in playlist order.
    async fn video_ids(&self, playlist_id: &str) -> Result<Vec<String>>;
}
