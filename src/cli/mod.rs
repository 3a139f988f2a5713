//! CLI module for tldw.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// tldw - YouTube transcripts and summaries
///
/// Fetches captions for YouTube videos and playlists, summarizes them with an
/// LLM, and keeps everything in a local SQLite file.
#[derive(Parser, Debug)]
#[command(name = "tldw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TLDW_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind to (defaults to server.host from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (defaults to server.port from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch and store the transcript of a video or playlist
    Transcript {
        /// YouTube URL or ID
        input: String,

        /// Treat input as a playlist and fetch every video
        #[arg(long)]
        playlist: bool,
    },

    /// Summarize the stored transcript of a video or playlist
    Summarize {
        /// YouTube URL or ID
        input: String,

        /// Treat input as a playlist and summarize every video
        #[arg(long)]
        playlist: bool,
    },

    /// Print a stored transcript (or summary with --summary)
    Retrieve {
        /// YouTube URL or video ID
        input: String,

        /// Print the stored summary instead of the transcript
        #[arg(long)]
        summary: bool,
    },

    /// Add the stored summary of a video to favourites
    Favourite {
        /// YouTube URL or video ID
        input: String,
    },

    /// List favourites
    Favourites,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration (API keys masked)
    Show,

    /// Write the current configuration to the config file
    Init,

    /// Show configuration file path
    Path,
}
