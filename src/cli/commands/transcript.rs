//! Transcript command implementation.

use super::{playlist_id, print_outcomes, video_id};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the transcript command.
pub async fn run_transcript(input: &str, playlist: bool, settings: Settings) -> Result<()> {
    let orchestrator = Orchestrator::new(&settings)?;

    if playlist {
        let playlist_id = playlist_id(input)?;
        let spinner = Output::spinner(&format!("Fetching transcripts for playlist {}...", playlist_id));
        let outcomes = orchestrator.playlist_transcripts(&playlist_id).await;
        spinner.finish_and_clear();

        let outcomes = outcomes?;
        Output::header(&format!("Playlist {} ({} videos)", playlist_id, outcomes.len()));
        let failed = print_outcomes(&outcomes);
        println!();
        Output::kv("Stored", &(outcomes.len() - failed).to_string());
        Output::kv("Failed", &failed.to_string());
        return Ok(());
    }

    let video_id = video_id(input)?;
    let spinner = Output::spinner(&format!("Fetching transcript for {}...", video_id));
    let result = orchestrator.transcript(&video_id, None).await;
    spinner.finish_and_clear();

    match result {
        Ok(transcript) => {
            println!("{}", transcript);
            Output::success(&format!("Stored transcript for {}", video_id));
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Failed to fetch transcript: {}", e));
            Err(e.into())
        }
    }
}
