//! Configuration module for tldw.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, SummaryPrompts};
pub use settings::{
    DatabaseSettings, GeneralSettings, LlmSettings, PromptSettings, ServerSettings, Settings,
    YoutubeSettings,
};
