//! OpenAI-compatible client configuration.
//!
//! Summaries go through OpenRouter by default, which speaks the OpenAI
//! chat-completions protocol, so the stock `async-openai` client is pointed
//! at a different base URL.

use crate::config::LlmSettings;
use crate::error::{Result, TldwError};
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create a chat client from the LLM settings.
///
/// Fails with `ConfigMissing` when no API key is configured.
pub fn create_client(settings: &LlmSettings) -> Result<Client<OpenAIConfig>> {
    let api_key = settings
        .api_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| TldwError::ConfigMissing("LLM API key (OPENROUTER_API_KEY)".to_string()))?;

    let config = OpenAIConfig::new()
        .with_api_base(&settings.base_url)
        .with_api_key(api_key);

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_seconds))
        .build()?;

    Ok(Client::with_config(config).with_http_client(http_client))
}
