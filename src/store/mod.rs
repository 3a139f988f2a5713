//! Persistence for transcripts, summaries and favourites.
//!
//! Everything lives in one SQLite file. Transcripts and summaries are
//! append-only: every fetch or generation adds a row, and reads return the
//! most recent one. Favourites point at a summary row by id.

mod sqlite;

pub use sqlite::Store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub id: i64,
    pub video_id: String,
    pub playlist_id: Option<String>,
    pub transcript: String,
    pub created_at: DateTime<Utc>,
}

/// A stored summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: i64,
    pub video_id: String,
    pub playlist_id: Option<String>,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

/// A favourite, joined with the text of the summary it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavouriteRecord {
    pub id: i64,
    pub video_id: String,
    pub summary_id: i64,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

/// All rows stored for one video, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoRecords {
    pub transcripts: Vec<TranscriptRecord>,
    pub summaries: Vec<SummaryRecord>,
}

impl VideoRecords {
    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty() && self.summaries.is_empty()
    }

    pub fn latest_transcript(&self) -> Option<&TranscriptRecord> {
        self.transcripts.last()
    }

    pub fn latest_summary(&self) -> Option<&SummaryRecord> {
        self.summaries.last()
    }
}
