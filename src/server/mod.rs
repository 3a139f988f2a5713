//! HTTP API.
//!
//! Every route answers with a JSON object: the requested field on success or
//! `{"error": "..."}` with a matching status code on failure. Playlist routes
//! report per-video failures inline and still answer 200.

mod error;
mod handlers;

pub use error::{ApiError, ErrorResponse};

use crate::orchestrator::Orchestrator;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state.
pub struct AppState {
    pub orchestrator: Orchestrator,
}

/// Route table, as (method, path, description). Used for the startup banner.
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/health", "Health"),
    ("GET", "/transcript/{video_id}", "Fetch transcript"),
    ("GET", "/transcripts/{playlist_id}", "Fetch playlist transcripts"),
    ("GET", "/summary/{video_id}", "Summarize video"),
    ("GET", "/summaries/{playlist_id}", "Summarize playlist"),
    ("GET", "/retrieve-summary/{video_id}", "Stored summary"),
    ("GET", "/retrieve-transcript/{video_id}", "Stored transcript"),
    ("POST", "/favourites", "Add favourite"),
    ("GET", "/favourites", "List favourites"),
];

/// Build the API router.
pub fn router(orchestrator: Orchestrator) -> Router {
    let state = Arc::new(AppState { orchestrator });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/transcript/{video_id}", get(handlers::get_transcript))
        .route(
            "/transcripts/{playlist_id}",
            get(handlers::get_playlist_transcripts),
        )
        .route("/summary/{video_id}", get(handlers::get_summary))
        .route(
            "/summaries/{playlist_id}",
            get(handlers::get_playlist_summaries),
        )
        .route(
            "/retrieve-summary/{video_id}",
            get(handlers::retrieve_summary),
        )
        .route(
            "/retrieve-transcript/{video_id}",
            get(handlers::retrieve_transcript),
        )
        .route(
            "/favourites",
            post(handlers::add_favourite).get(handlers::list_favourites),
        )
        .layer(cors)
        .with_state(state)
}
