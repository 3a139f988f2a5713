//! Route handlers.

use super::error::ApiError;
use super::AppState;
use crate::orchestrator::ItemOutcome;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// === Request/Response Types ===

#[derive(Deserialize)]
pub struct FavouriteRequest {
    pub video_id: String,
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// One entry of a playlist batch: the value on success, `error` otherwise.
#[derive(Serialize)]
pub struct PlaylistItem {
    pub video_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct PlaylistTranscriptsResponse {
    pub transcripts: Vec<PlaylistItem>,
}

#[derive(Serialize)]
pub struct PlaylistSummariesResponse {
    pub summaries: Vec<PlaylistItem>,
}

#[derive(Serialize)]
pub struct FavouriteInfo {
    pub video_id: String,
    pub summary: String,
}

#[derive(Serialize)]
pub struct FavouritesResponse {
    pub favourites: Vec<FavouriteInfo>,
}

#[derive(Clone, Copy)]
enum ItemField {
    Transcript,
    Summary,
}

fn to_items(outcomes: Vec<ItemOutcome>, field: ItemField) -> Vec<PlaylistItem> {
    outcomes
        .into_iter()
        .map(|o| {
            let mut item = PlaylistItem {
                video_id: o.video_id,
                transcript: None,
                summary: None,
                error: None,
            };
            match (o.result, field) {
                (Ok(text), ItemField::Transcript) => item.transcript = Some(text),
                (Ok(text), ItemField::Summary) => item.summary = Some(text),
                (Err(e), _) => item.error = Some(e.to_string()),
            }
            item
        })
        .collect()
}

// === Handlers ===

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn get_transcript(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let transcript = state.orchestrator.transcript(&video_id, None).await?;
    Ok(Json(TranscriptResponse { transcript }))
}

pub async fn get_playlist_transcripts(
    State(state): State<Arc<AppState>>,
    Path(playlist_id): Path<String>,
) -> Result<Json<PlaylistTranscriptsResponse>, ApiError> {
    let outcomes = state.orchestrator.playlist_transcripts(&playlist_id).await?;
    Ok(Json(PlaylistTranscriptsResponse {
        transcripts: to_items(outcomes, ItemField::Transcript),
    }))
}

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = state.orchestrator.summary(&video_id, None).await?;
    Ok(Json(SummaryResponse { summary }))
}

pub async fn get_playlist_summaries(
    State(state): State<Arc<AppState>>,
    Path(playlist_id): Path<String>,
) -> Result<Json<PlaylistSummariesResponse>, ApiError> {
    let outcomes = state.orchestrator.playlist_summaries(&playlist_id).await?;
    Ok(Json(PlaylistSummariesResponse {
        summaries: to_items(outcomes, ItemField::Summary),
    }))
}

pub async fn retrieve_summary(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = state.orchestrator.stored_summary(&video_id)?;
    Ok(Json(SummaryResponse { summary }))
}

pub async fn retrieve_transcript(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let transcript = state.orchestrator.stored_transcript(&video_id)?;
    Ok(Json(TranscriptResponse { transcript }))
}

pub async fn add_favourite(
    State(state): State<Arc<AppState>>,
    body: Result<Json<FavouriteRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = body?;
    let favourite = state.orchestrator.add_favourite(&req.video_id)?;
    Ok(Json(MessageResponse {
        message: format!("Video {} added to favourites", favourite.video_id),
    }))
}

pub async fn list_favourites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FavouritesResponse>, ApiError> {
    let favourites = state.orchestrator.favourites()?;
    Ok(Json(FavouritesResponse {
        favourites: favourites
            .into_iter()
            .map(|f| FavouriteInfo {
                video_id: f.video_id,
                summary: f.summary,
            })
            .collect(),
    }))
}
