//! Pipeline orchestrator for tldw.
//!
//! Composes the caption provider, playlist resolver, summarizer and store
//! into the operations exposed by the HTTP API and the CLI.

use crate::config::{Prompts, Settings};
use crate::error::{Result, TldwError};
use crate::playlist::{PlaylistResolver, YoutubeDataApi};
use crate::store::{FavouriteRecord, Store};
use crate::summarizer::{OpenAISummarizer, Summarizer};
use crate::transcript::{fetch_transcript, CaptionProvider, YoutubeCaptions};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Outcome for one video of a playlist batch.
#[derive(Debug)]
pub struct ItemOutcome {
    pub video_id: String,
    pub result: Result<String>,
}

/// The main orchestrator for the tldw pipeline.
pub struct Orchestrator {
    captions: Arc<dyn CaptionProvider>,
    playlists: Arc<dyn PlaylistResolver>,
    summarizer: Arc<dyn Summarizer>,
    store: Arc<Store>,
}

impl Orchestrator {
    /// Create an orchestrator with the production components.
    pub fn new(settings: &Settings) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let captions = Arc::new(YoutubeCaptions::new(settings.youtube.languages.clone())?);
        let playlists = Arc::new(YoutubeDataApi::new(&settings.youtube)?);
        let summarizer = Arc::new(OpenAISummarizer::new(&settings.llm, prompts)?);
        let store = Arc::new(Store::open(&settings.database_path())?);

        info!("Using {} for summaries", settings.llm.model);

        Ok(Self::with_components(captions, playlists, summarizer, store))
    }

    /// Create an orchestrator with custom components.
    pub fn with_components(
        captions: Arc<dyn CaptionProvider>,
        playlists: Arc<dyn PlaylistResolver>,
        summarizer: Arc<dyn Summarizer>,
        store: Arc<Store>,
    ) -> Self {
        Self {
            captions,
            playlists,
            summarizer,
            store,
        }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> Arc<Store> {
        self.store.clone()
    }

    /// Fetch a video's transcript and append it to the store.
    #[instrument(skip(self))]
    pub async fn transcript(&self, video_id: &str, playlist_id: Option<&str>) -> Result<String> {
        let transcript = fetch_transcript(self.captions.as_ref(), video_id).await?;
        self.store
            .insert_transcript(video_id, &transcript, playlist_id)?;
        Ok(transcript)
    }

    /// Fetch and store the transcript of every video in a playlist.
    ///
    /// Per-video failures are recorded in the outcome list; only a failure
    /// to resolve the playlist itself is returned as an error.
    #[instrument(skip(self))]
    pub async fn playlist_transcripts(&self, playlist_id: &str) -> Result<Vec<ItemOutcome>> {
        let video_ids = self.playlists.video_ids(playlist_id).await?;
        info!("Fetching transcripts for {} videos", video_ids.len());

        let mut outcomes = Vec::with_capacity(video_ids.len());
        for video_id in video_ids {
            let result = self.transcript(&video_id, Some(playlist_id)).await;
            if let Err(e) = &result {
                warn!("Error processing video {}: {}", video_id, e);
            }
            outcomes.push(ItemOutcome { video_id, result });
        }
        Ok(outcomes)
    }

    /// Summarize the stored transcript of a video and append the summary.
    ///
    /// Fails with `NotFound` and writes nothing when no transcript is stored.
    #[instrument(skip(self))]
    pub async fn summary(&self, video_id: &str, playlist_id: Option<&str>) -> Result<String> {
        let transcript = self.store.latest_transcript(video_id)?.ok_or_else(|| {
            TldwError::NotFound(format!("No transcript found for video {}", video_id))
        })?;

        let summary = self.summarizer.summarize(&transcript.transcript).await?;
        self.store.insert_summary(video_id, &summary, playlist_id)?;
        Ok(summary)
    }

    /// Summarize every video of a playlist that has a stored transcript.
    #[instrument(skip(self))]
    pub async fn playlist_summaries(&self, playlist_id: &str) -> Result<Vec<ItemOutcome>> {
        let video_ids = self.playlists.video_ids(playlist_id).await?;
        info!("Summarizing {} videos", video_ids.len());

        let mut outcomes = Vec::with_capacity(video_ids.len());
        for video_id in video_ids {
            let result = self.summary(&video_id, Some(playlist_id)).await;
            if let Err(e) = &result {
                warn!("Error processing video {}: {}", video_id, e);
            }
            outcomes.push(ItemOutcome { video_id, result });
        }
        Ok(outcomes)
    }

    /// The most recently stored summary of a video.
    pub fn stored_summary(&self, video_id: &str) -> Result<String> {
        self.store
            .latest_summary(video_id)?
            .map(|r| r.summary)
            .ok_or_else(|| TldwError::NotFound("No summary found for this video".to_string()))
    }

    /// The most recently stored transcript of a video.
    pub fn stored_transcript(&self, video_id: &str) -> Result<String> {
        self.store
            .latest_transcript(video_id)?
            .map(|r| r.transcript)
            .ok_or_else(|| TldwError::NotFound("No transcript found for this video".to_string()))
    }

    /// Add the latest stored summary of a video to the favourites.
    #[instrument(skip(self))]
    pub fn add_favourite(&self, video_id: &str) -> Result<FavouriteRecord> {
        let summary = self.store.latest_summary(video_id)?.ok_or_else(|| {
            TldwError::NotFound(format!("No summary found for video {}", video_id))
        })?;

        let id = self.store.insert_favourite(&summary.video_id, summary.id)?;
        self.store
            .fetch_favourite(id)?
            .ok_or_else(|| TldwError::Storage(format!("Favourite {} vanished after insert", id)))
    }

    /// All favourites, oldest first.
    pub fn favourites(&self) -> Result<Vec<FavouriteRecord>> {
        self.store.fetch_all_favourites()
    }
}
