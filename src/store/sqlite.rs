//! SQLite-backed store.
//!
//! A single long-lived connection is shared behind a mutex. The lock is only
//! held for the duration of one statement, never across an `.await`.

use super::{FavouriteRecord, SummaryRecord, TranscriptRecord, VideoRecords};
use crate::error::{Result, TldwError};
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS transcripts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    video_id TEXT NOT NULL,
    playlist_id TEXT,
    transcript TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_transcripts_video_id ON transcripts(video_id);

CREATE TABLE IF NOT EXISTS summaries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    video_id TEXT NOT NULL,
    playlist_id TEXT,
    summary TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_summaries_video_id ON summaries(video_id);

CREATE TABLE IF NOT EXISTS favourites (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    video_id TEXT NOT NULL,
    summary_id INTEGER NOT NULL REFERENCES summaries(id),
    created_at TEXT NOT NULL
);
"#;

/// Store for transcripts, summaries and favourites.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Open (or create) the store at `path`.
    #[instrument(skip_all)]
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        let store = Self::with_connection(conn)?;
        info!("Opened store at {:?}", path);
        Ok(store)
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.create_schema()?;
        Ok(store)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| TldwError::Storage(format!("Failed to acquire lock: {}", e)))
    }

    /// Create all tables if they do not exist yet.
    pub fn create_schema(&self) -> Result<()> {
        self.conn()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Append a transcript row. Returns the new row id.
    pub fn insert_transcript(
        &self,
        video_id: &str,
        transcript: &str,
        playlist_id: Option<&str>,
    ) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO transcripts (video_id, playlist_id, transcript, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![video_id, playlist_id, transcript, Utc::now().to_rfc3339()],
        )?;

        let id = conn.last_insert_rowid();
        info!("Stored transcript for video {}", video_id);
        Ok(id)
    }

    /// Append a summary row. Returns the new row id.
    pub fn insert_summary(
        &self,
        video_id: &str,
        summary: &str,
        playlist_id: Option<&str>,
    ) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO summaries (video_id, playlist_id, summary, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![video_id, playlist_id, summary, Utc::now().to_rfc3339()],
        )?;

        let id = conn.last_insert_rowid();
        info!("Stored summary for video {}", video_id);
        Ok(id)
    }

    /// All transcripts and summaries stored for a video, oldest first.
    pub fn fetch_by_video_id(&self, video_id: &str) -> Result<VideoRecords> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, video_id, playlist_id, transcript, created_at FROM transcripts WHERE video_id = ?1 ORDER BY id",
        )?;
        let transcripts = stmt
            .query_map(params![video_id], transcript_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare(
            "SELECT id, video_id, playlist_id, summary, created_at FROM summaries WHERE video_id = ?1 ORDER BY id",
        )?;
        let summaries = stmt
            .query_map(params![video_id], summary_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(
            "Video {} has {} transcripts and {} summaries",
            video_id,
            transcripts.len(),
            summaries.len()
        );
        Ok(VideoRecords {
            transcripts,
            summaries,
        })
    }

    /// The most recently stored transcript for a video.
    pub fn latest_transcript(&self, video_id: &str) -> Result<Option<TranscriptRecord>> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                "SELECT id, video_id, playlist_id, transcript, created_at FROM transcripts WHERE video_id = ?1 ORDER BY id DESC LIMIT 1",
                params![video_id],
                transcript_from_row,
            )
            .optional()?;
        Ok(record)
    }

    /// The most recently stored summary for a video.
    pub fn latest_summary(&self, video_id: &str) -> Result<Option<SummaryRecord>> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                "SELECT id, video_id, playlist_id, summary, created_at FROM summaries WHERE video_id = ?1 ORDER BY id DESC LIMIT 1",
                params![video_id],
                summary_from_row,
            )
            .optional()?;
        Ok(record)
    }

    /// Number of transcript rows stored for a video.
    pub fn transcript_count(&self, video_id: &str) -> Result<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM transcripts WHERE video_id = ?1",
            params![video_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Mark a stored summary as a favourite. Returns the new row id.
    pub fn insert_favourite(&self, video_id: &str, summary_id: i64) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO favourites (video_id, summary_id, created_at) VALUES (?1, ?2, ?3)",
            params![video_id, summary_id, Utc::now().to_rfc3339()],
        )?;

        let id = conn.last_insert_rowid();
        info!("Video {} added to favourites", video_id);
        Ok(id)
    }

    /// All favourites with their summary text, oldest first.
    pub fn fetch_all_favourites(&self) -> Result<Vec<FavouriteRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT f.id, f.video_id, f.summary_id, s.summary, f.created_at
            FROM favourites f
            JOIN summaries s ON s.id = f.summary_id
            ORDER BY f.id
            "#,
        )?;

        let favourites = stmt
            .query_map([], favourite_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(favourites)
    }

    /// A single favourite by row id, with its summary text.
    pub fn fetch_favourite(&self, id: i64) -> Result<Option<FavouriteRecord>> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                r#"
                SELECT f.id, f.video_id, f.summary_id, s.summary, f.created_at
                FROM favourites f
                JOIN summaries s ON s.id = f.summary_id
                WHERE f.id = ?1
                "#,
                params![id],
                favourite_from_row,
            )
            .optional()?;
        Ok(record)
    }

    /// Total number of favourite rows.
    pub fn favourite_count(&self) -> Result<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM favourites", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn timestamp_from_row(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn transcript_from_row(row: &Row<'_>) -> rusqlite::Result<TranscriptRecord> {
    Ok(TranscriptRecord {
        id: row.get(0)?,
        video_id: row.get(1)?,
        playlist_id: row.get(2)?,
        transcript: row.get(3)?,
        created_at: timestamp_from_row(row, 4)?,
    })
}

fn favourite_from_row(row: &Row<'_>) -> rusqlite::Result<FavouriteRecord> {
    Ok(FavouriteRecord {
        id: row.get(0)?,
        video_id: row.get(1)?,
        summary_id: row.get(2)?,
        summary: row.get(3)?,
        created_at: timestamp_from_row(row, 4)?,
    })
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<SummaryRecord> {
    Ok(SummaryRecord {
        id: row.get(0)?,
        video_id: row.get(1)?,
        playlist_id: row.get(2)?,
        summary: row.get(3)?,
        created_at: timestamp_from_row(row, 4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_round_trip() {
        let store = Store::in_memory().unwrap();
        store
            .insert_transcript("abc123", "Hello world", None)
            .unwrap();

        let record = store.latest_transcript("abc123").unwrap().unwrap();
        assert_eq!(record.transcript, "Hello world");
        assert_eq!(record.video_id, "abc123");
        assert!(record.playlist_id.is_none());
    }

    #[test]
    fn test_transcripts_are_append_only() {
        let store = Store::in_memory().unwrap();
        store.insert_transcript("abc123", "first", None).unwrap();
        store
            .insert_transcript("abc123", "second", Some("PLx"))
            .unwrap();

        assert_eq!(store.transcript_count("abc123").unwrap(), 2);

        let records = store.fetch_by_video_id("abc123").unwrap();
        assert_eq!(records.transcripts.len(), 2);
        assert_eq!(records.transcripts[0].transcript, "first");
        assert_eq!(records.latest_transcript().unwrap().transcript, "second");
        assert_eq!(
            records.latest_transcript().unwrap().playlist_id.as_deref(),
            Some("PLx")
        );
    }

    #[test]
    fn test_fetch_unknown_video() {
        let store = Store::in_memory().unwrap();

        assert!(store.fetch_by_video_id("missing").unwrap().is_empty());
        assert!(store.latest_transcript("missing").unwrap().is_none());
        assert!(store.latest_summary("missing").unwrap().is_none());
    }

    #[test]
    fn test_summary_and_transcript_are_independent() {
        let store = Store::in_memory().unwrap();
        store.insert_summary("abc123", "A recap.", None).unwrap();

        let records = store.fetch_by_video_id("abc123").unwrap();
        assert!(records.transcripts.is_empty());
        assert_eq!(records.summaries.len(), 1);
        assert!(store.latest_transcript("abc123").unwrap().is_none());
    }

    #[test]
    fn test_favourites_reference_summary() {
        let store = Store::in_memory().unwrap();
        let summary_id = store
            .insert_summary("abc123", "A concise recap.", None)
            .unwrap();
        store.insert_favourite("abc123", summary_id).unwrap();

        let favourites = store.fetch_all_favourites().unwrap();
        assert_eq!(favourites.len(), 1);
        assert_eq!(favourites[0].video_id, "abc123");
        assert_eq!(favourites[0].summary, "A concise recap.");
        assert_eq!(favourites[0].summary_id, summary_id);
    }

    #[test]
    fn test_favourite_requires_existing_summary() {
        let store = Store::in_memory().unwrap();

        assert!(store.insert_favourite("abc123", 42).is_err());
        assert_eq!(store.favourite_count().unwrap(), 0);
    }

    #[test]
    fn test_fetch_favourite_by_id() {
        let store = Store::in_memory().unwrap();
        let summary_id = store.insert_summary("abc123", "A concise recap.", None).unwrap();
        let id = store.insert_favourite("abc123", summary_id).unwrap();

        let favourite = store.fetch_favourite(id).unwrap().unwrap();
        assert_eq!(favourite.summary, "A concise recap.");
        assert_eq!(store.fetch_all_favourites().unwrap()[0], favourite);
        assert!(store.fetch_favourite(id + 1).unwrap().is_none());
    }

    #[test]
    fn test_create_schema_is_idempotent() {
        let store = Store::in_memory().unwrap();
        store.insert_transcript("abc123", "kept", None).unwrap();
        store.create_schema().unwrap();

        assert_eq!(store.transcript_count("abc123").unwrap(), 1);
    }

    #[test]
    fn test_open_file_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("summaries.db");

        {
            let store = Store::open(&path).unwrap();
            store.insert_summary("abc123", "Persisted.", None).unwrap();
        }

        let store = Store::open(&path).unwrap();
        let summary = store.latest_summary("abc123").unwrap().unwrap();
        assert_eq!(summary.summary, "Persisted.");
    }
}
