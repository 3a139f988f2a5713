//! tldw - YouTube transcripts and LLM summaries
//!
//! Fetches captions for YouTube videos and playlists, summarizes them with an
//! OpenAI-compatible chat model, and keeps transcripts, summaries and
//! favourites in a local SQLite file. Everything is available over a small
//! HTTP API and from the command line.
//!
//! # Architecture
//!
//! - `config` - Settings and prompt templates
//! - `transcript` - Caption retrieval and flattening
//! - `playlist` - Playlist to video id resolution
//! - `summarizer` - LLM summary generation
//! - `store` - SQLite persistence
//! - `orchestrator` - Composition of the above per operation
//! - `server` - HTTP routes
//! - `cli` - Command-line front end
//!
//! # Example
//!
//! ```rust,no_run
//! use tldw::config::Settings;
//! use tldw::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(&settings)?;
//!
//!     orchestrator.transcript("dQw4w9WgXcQ", None).await?;
//!     let summary = orchestrator.summary("dQw4w9WgXcQ", None).await?;
//!     println!("{}", summary);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod openai;
pub mod orchestrator;
pub mod playlist;
pub mod server;
pub mod store;
pub mod summarizer;
pub mod transcript;
pub mod youtube_id;

pub use error::{ErrorKind, Result, TldwError};
