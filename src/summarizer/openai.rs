//! Chat-completion summarizer (OpenAI protocol, OpenRouter by default).

use super::Summarizer;
use crate::config::{LlmSettings, Prompts};
use crate::error::{Result, TldwError};
use crate::openai::create_client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Summarizer backed by an OpenAI-compatible chat endpoint.
pub struct OpenAISummarizer {
    /// `None` when no API key is configured; every call then fails with
    /// `ConfigMissing` instead of refusing to start the server.
    client: Option<Client<OpenAIConfig>>,
    model: String,
    temperature: f32,
    prompts: Prompts,
}

impl OpenAISummarizer {
    pub fn new(settings: &LlmSettings, prompts: Prompts) -> Result<Self> {
        let has_key = settings.api_key.as_deref().is_some_and(|k| !k.is_empty());
        let client = if has_key {
            Some(create_client(settings)?)
        } else {
            warn!("No LLM API key configured; summary requests will fail");
            None
        };

        Ok(Self {
            client,
            model: settings.model.clone(),
            temperature: settings.temperature,
            prompts,
        })
    }

    fn build_request(
        &self,
        transcript: &str,
    ) -> Result<async_openai::types::CreateChatCompletionRequest> {
        let prompt = self.prompts.summary_prompt(transcript);

        let messages: Vec<ChatCompletionRequestMessage> =
            vec![ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| TldwError::OpenAI(e.to_string()))?
                .into()];

        CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .build()
            .map_err(|e| TldwError::OpenAI(e.to_string()))
    }
}

#[async_trait]
impl Summarizer for OpenAISummarizer {
    #[instrument(skip(self, transcript), fields(model = %self.model, chars = transcript.len()))]
    async fn summarize(&self, transcript: &str) -> Result<String> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| TldwError::ConfigMissing("LLM API key (OPENROUTER_API_KEY)".to_string()))?;

        let request = self.build_request(transcript)?;

        info!("Requesting summary from {}", self.model);
        let response = client
            .chat()
            .create(request)
            .await
            .map_err(|e| TldwError::OpenAI(format!("Failed to generate summary: {}", e)))?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| TldwError::Upstream("Empty response from LLM".to_string()))?
            .clone();

        debug!("Generated summary of {} chars", summary.len());
        Ok(summary)
    }
}
