//! Retrieve command: print stored text without calling any external service.

use super::video_id;
use crate::config::Settings;
use crate::store::Store;
use anyhow::{anyhow, Result};

/// Run the retrieve command.
pub fn run_retrieve(input: &str, summary: bool, settings: Settings) -> Result<()> {
    let video_id = video_id(input)?;
    let store = Store::open(&settings.database_path())?;

    let text = if summary {
        store
            .latest_summary(&video_id)?
            .map(|r| r.summary)
            .ok_or_else(|| anyhow!("No summary found for video {}", video_id))?
    } else {
        store
            .latest_transcript(&video_id)?
            .map(|r| r.transcript)
            .ok_or_else(|| anyhow!("No transcript found for video {}", video_id))?
    };

    println!("{}", text);
    Ok(())
}
