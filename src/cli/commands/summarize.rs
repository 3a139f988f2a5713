//! Summarize command implementation.

use super::{playlist_id, print_outcomes, video_id};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the summarize command.
pub async fn run_summarize(input: &str, playlist: bool, settings: Settings) -> Result<()> {
    let orchestrator = Orchestrator::new(&settings)?;

    if playlist {
        let playlist_id = playlist_id(input)?;
        let spinner = Output::spinner(&format!("Summarizing playlist {}...", playlist_id));
        let outcomes = orchestrator.playlist_summaries(&playlist_id).await;
        spinner.finish_and_clear();

        let outcomes = outcomes?;
        Output::header(&format!("Playlist {} ({} videos)", playlist_id, outcomes.len()));
        let failed = print_outcomes(&outcomes);
        if failed > 0 {
            println!();
            Output::info("Videos without a stored transcript need 'tldw transcript' first.");
        }
        return Ok(());
    }

    let video_id = video_id(input)?;
    let spinner = Output::spinner(&format!("Summarizing {} with {}...", video_id, settings.llm.model));
    let result = orchestrator.summary(&video_id, None).await;
    spinner.finish_and_clear();

    match result {
        Ok(summary) => {
            println!("{}", summary);
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Failed to summarize: {}", e));
            Err(e.into())
        }
    }
}
