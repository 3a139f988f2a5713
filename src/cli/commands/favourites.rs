//! Favourite commands.

use super::video_id;
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Add the latest stored summary of a video to favourites.
pub fn run_favourite(input: &str, settings: Settings) -> Result<()> {
    let video_id = video_id(input)?;
    let orchestrator = Orchestrator::new(&settings)?;

    let favourite = orchestrator.add_favourite(&video_id)?;
    Output::success(&format!("Video {} added to favourites", favourite.video_id));
    Ok(())
}

/// List favourites.
pub fn run_favourites(settings: Settings) -> Result<()> {
    let orchestrator = Orchestrator::new(&settings)?;
    let favourites = orchestrator.favourites()?;

    if favourites.is_empty() {
        Output::info("No favourites yet. Use 'tldw favourite <video>' to add one.");
        return Ok(());
    }

    Output::header(&format!("Favourites ({})", favourites.len()));
    for favourite in &favourites {
        println!();
        Output::kv(
            &favourite.video_id,
            &favourite.created_at.format("%Y-%m-%d %H:%M").to_string(),
        );
        println!("{}", favourite.summary);
    }
    Ok(())
}
