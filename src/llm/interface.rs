use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ProviderError;

/// One message of a chat-style completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Interface for a stateless language model
/// Stateless means the LLM doesn't store memory, system prompts, or user messages
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Run one chat completion and return the first choice's message content.
    ///
    /// # Arguments
    /// * `messages` - The full conversation to send, system message included
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, ProviderError>;

    /// Model identifier sent with every request
    fn model(&self) -> &str;
}
