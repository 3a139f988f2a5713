//! Configuration settings for tldw.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub youtube: YoutubeSettings,
    pub llm: LlmSettings,
    pub prompts: PromptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP API server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Path to the SQLite database holding transcripts, summaries and favourites.
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "summaries.db".to_string(),
        }
    }
}

/// YouTube-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// YouTube Data API key, required for playlist lookups.
    pub api_key: Option<String>,
    /// Preferred caption languages, in order.
    pub languages: Vec<String>,
    /// Base URL of the YouTube Data API.
    pub api_base: String,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            languages: vec!["en".to_string()],
            api_base: "https://www.googleapis.com/youtube/v3".to_string(),
        }
    }
}

/// LLM (chat completion) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// API key for the completion provider.
    pub api_key: Option<String>,
    /// OpenAI-compatible API base URL.
    pub base_url: String,
    /// Model used for summaries.
    pub model: String,
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "openai/gpt-4o".to_string(),
            temperature: 0.5,
            timeout_seconds: 300,
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    ///
    /// API keys found in the environment take precedence over the file.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        let mut settings = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Settings::default()
        };

        settings.apply_env(|name| std::env::var(name).ok());
        Ok(settings)
    }

    /// Override API keys from environment variables.
    ///
    /// `API_KEY` and `YOUTUBE_API_KEY` feed the YouTube Data API key,
    /// `OPENROUTER_API_KEY` feeds the LLM key. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("YOUTUBE_API_KEY").or_else(|| non_empty("API_KEY")) {
            self.youtube.api_key = Some(key);
        }
        if let Some(key) = non_empty("OPENROUTER_API_KEY") {
            self.llm.api_key = Some(key);
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::TldwError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tldw")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded database path.
    pub fn database_path(&self) -> PathBuf {
        Self::expand_path(&self.database.path)
    }

    /// Copy of the settings with API keys masked, for display.
    pub fn redacted(&self) -> Self {
        let mask = |key: &Option<String>| key.as_ref().map(|_| "********".to_string());
        let mut copy = self.clone();
        copy.youtube.api_key = mask(&self.youtube.api_key);
        copy.llm.api_key = mask(&self.llm.api_key);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.database.path, "summaries.db");
        assert_eq!(settings.llm.model, "openai/gpt-4o");
        assert!((settings.llm.temperature - 0.5).abs() < f32::EPSILON);
        assert_eq!(settings.youtube.languages, vec!["en".to_string()]);
        assert!(settings.youtube.api_key.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            port = 9000

            [llm]
            model = "anthropic/claude-3.5-haiku"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.llm.model, "anthropic/claude-3.5-haiku");
        assert_eq!(settings.llm.base_url, "https://openrouter.ai/api/v1");
    }

    #[test]
    fn test_apply_env() {
        let env: HashMap<&str, &str> = [("API_KEY", "yt-key"), ("OPENROUTER_API_KEY", "or-key")]
            .into_iter()
            .collect();

        let mut settings = Settings::default();
        settings.apply_env(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(settings.youtube.api_key.as_deref(), Some("yt-key"));
        assert_eq!(settings.llm.api_key.as_deref(), Some("or-key"));
    }

    #[test]
    fn test_apply_env_ignores_empty_values() {
        let mut settings = Settings::default();
        settings.youtube.api_key = Some("from-file".to_string());
        settings.apply_env(|name| (name == "API_KEY").then(|| "  ".to_string()));

        assert_eq!(settings.youtube.api_key.as_deref(), Some("from-file"));
        assert!(settings.llm.api_key.is_none());
    }

    #[test]
    fn test_redacted_masks_keys() {
        let mut settings = Settings::default();
        settings.llm.api_key = Some("sk-or-secret".to_string());

        let shown = toml::to_string_pretty(&settings.redacted()).unwrap();
        assert!(!shown.contains("sk-or-secret"));
        assert!(shown.contains("********"));
    }
}
