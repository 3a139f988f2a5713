//! YouTube Data API v3 playlist resolver.

use super::{PlaylistResolver, PLAYLIST_PAGE_SIZE};
use crate::config::YoutubeSettings;
use crate::error::{Result, TldwError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Resolves playlists through the `playlistItems` endpoint.
pub struct YoutubeDataApi {
    client: reqwest::Client,
    api_key: Option<String>,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct PlaylistItemsResponse {
    #[serde(default)]
    items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItem {
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDetails {
    video_id: String,
}

impl YoutubeDataApi {
    pub fn new(settings: &YoutubeSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
            api_base: settings.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Extract video ids from a `playlistItems` response body.
    fn parse_video_ids(body: &str) -> Result<Vec<String>> {
        let response: PlaylistItemsResponse = serde_json::from_str(body)?;
        Ok(response
            .items
            .into_iter()
            .map(|item| item.content_details.video_id)
            .collect())
    }
}

#[async_trait]
impl PlaylistResolver for YoutubeDataApi {
    #[instrument(skip(self))]
    async fn video_ids(&self, playlist_id: &str) -> Result<Vec<String>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| TldwError::ConfigMissing("YouTube API key".to_string()))?;

        let max_results = PLAYLIST_PAGE_SIZE.to_string();
        let response = self
            .client
            .get(format!("{}/playlistItems", self.api_base))
            .query(&[
                ("part", "contentDetails"),
                ("playlistId", playlist_id),
                ("maxResults", max_results.as_str()),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|e| TldwError::Upstream(format!("Failed to fetch playlist: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TldwError::Upstream(format!(
                "Failed to fetch playlist: {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TldwError::Upstream(format!("Failed to read playlist response: {}", e)))?;
        let ids = Self::parse_video_ids(&body).map_err(|e| {
            TldwError::Upstream(format!("Invalid playlist response: {}", e))
        })?;

        debug!("Playlist {} resolved to {} videos", playlist_id, ids.len());
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use axum::extract::RawQuery;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use std::sync::{Arc, Mutex};

    /// Serve a fixed `playlistItems` reply on a local port and record the
    /// query string of the last request.
    async fn stub_api(
        status: StatusCode,
        body: &'static str,
    ) -> (YoutubeDataApi, Arc<Mutex<Option<String>>>) {
        let seen = Arc::new(Mutex::new(None));
        let recorder = seen.clone();
        let app = Router::new().route(
            "/playlistItems",
            get(move |RawQuery(query): RawQuery| {
                let recorder = recorder.clone();
                async move {
                    *recorder.lock().unwrap() = query;
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let settings = YoutubeSettings {
            api_key: Some("k".to_string()),
            api_base: format!("http://{}", addr),
            ..YoutubeSettings::default()
        };
        (YoutubeDataApi::new(&settings).unwrap(), seen)
    }

    #[test]
    fn test_parse_video_ids() {
        let body = r#"{
            "kind": "youtube#playlistItemListResponse",
            "nextPageToken": "EAAaBlBUOkNESQ",
            "items": [
                {"kind": "youtube#playlistItem", "contentDetails": {"videoId": "dQw4w9WgXcQ", "videoPublishedAt": "2009-10-25T06:57:33Z"}},
                {"kind": "youtube#playlistItem", "contentDetails": {"videoId": "9bZkp7q19f0"}}
            ],
            "pageInfo": {"totalResults": 120, "resultsPerPage": 50}
        }"#;

        let ids = YoutubeDataApi::parse_video_ids(body).unwrap();
        assert_eq!(ids, vec!["dQw4w9WgXcQ", "9bZkp7q19f0"]);
    }

    #[test]
    fn test_parse_empty_playlist() {
        let ids = YoutubeDataApi::parse_video_ids(r#"{"kind": "youtube#playlistItemListResponse"}"#)
            .unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let api = YoutubeDataApi::new(&YoutubeSettings::default()).unwrap();

        let err = api.video_ids("PLtest").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigMissing);
    }

    #[tokio::test]
    async fn test_empty_api_key_counts_as_missing() {
        let settings = YoutubeSettings {
            api_key: Some(String::new()),
            ..YoutubeSettings::default()
        };
        let api = YoutubeDataApi::new(&settings).unwrap();

        let err = api.video_ids("PLtest").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigMissing);
    }

    #[tokio::test]
    async fn test_requests_single_page() {
        let (api, seen) = stub_api(
            StatusCode::OK,
            r#"{"items": [
                {"contentDetails": {"videoId": "9bZkp7q19f0"}},
                {"contentDetails": {"videoId": "dQw4w9WgXcQ"}}
            ]}"#,
        )
        .await;

        let ids = api.video_ids("PL1").await.unwrap();
        assert_eq!(ids, vec!["9bZkp7q19f0", "dQw4w9WgXcQ"]);
        assert_eq!(
            seen.lock().unwrap().as_deref(),
            Some("part=contentDetails&playlistId=PL1&maxResults=50&key=k")
        );
    }

    #[tokio::test]
    async fn test_error_status_is_upstream() {
        let (api, _) = stub_api(StatusCode::FORBIDDEN, r#"{"error": {"code": 403}}"#).await;

        let err = api.video_ids("PL1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert!(err.to_string().contains("403"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_upstream() {
        let (api, _) = stub_api(StatusCode::OK, "<html>oops</html>").await;

        let err = api.video_ids("PL1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert!(err.to_string().contains("Invalid playlist response"));
    }
}
