use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{extraction_prompt, parse_completion, ExtractionError, StateExtractor};
use crate::advisor::input::ResolvedFields;
use crate::config::ExtractionConfig;

/// Chat-completions client for the Groq OpenAI-compatible endpoint.
pub struct GroqExtractor {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl GroqExtractor {
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ExtractionError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(ExtractionError::NotConfigured)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key,
            model: config.model.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl StateExtractor for GroqExtractor {
    async fn extract(&self, text: &str) -> Result<ResolvedFields, ExtractionError> {
        // Low temperature keeps the structured output consistent run to run.
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": extraction_prompt(text) }],
            "temperature": 0.1,
            "max_tokens": 1024,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ExtractionError::EmptyCompletion)?;

        debug!(model = %self.model, "extraction completion received");
        parse_completion(&content)
    }
}
