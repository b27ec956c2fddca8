use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::error::ProviderError;
use super::interface::{ChatMessage, StatelessLLMInterface};

/// OpenAI compatible LLM implementation
/// Talks to any `/chat/completions` endpoint (Groq, OpenAI, DeepSeek, Mistral...)
pub struct OpenAICompatibleLLM {
    client: Client,
    model: String,
    base_url: String,
    api_key: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAICompatibleLLM {
    pub fn new(model: String, base_url: String, api_key: String, temperature: f32) -> Self {
        info!(
            "Initialized OpenAICompatibleLLM: model={}, base_url={}, temperature={}",
            model, base_url, temperature
        );
        Self {
            client: Client::new(),
            model,
            base_url,
            api_key,
            temperature,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: &messages,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Provider answered {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(ProviderError::from_error_body(status.as_u16(), &body));
        }

        extract_first_choice(status.as_u16(), &body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Pull the first choice's message content out of a completion body.
///
/// The content is returned verbatim; an error object inside a success
/// response is reported as an API error.
pub fn extract_first_choice(status: u16, body: &str) -> Result<String, ProviderError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ProviderError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if value.get("error").is_some_and(|e| !e.is_null()) {
        return Err(ProviderError::from_error_value(status, &value));
    }

    let completion: ChatCompletionResponse = serde_json::from_value(value)
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| ProviderError::MalformedResponse("completion has no choice content".to_string()))
}
