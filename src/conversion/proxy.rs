use std::sync::Arc;
use tracing::{debug, error, warn};

use super::error::{ConversionError, ConversionErrorKind};
use super::types::ConversionResult;
use crate::llm::{ChatMessage, StatelessLLMInterface};

/// Forwards conversion prompts to the LLM provider.
///
/// Holds no per-request state, so one instance serves every request and any
/// call can be retried.
pub struct ConversionProxy {
    llm: Arc<dyn StatelessLLMInterface>,
    system_prompt: String,
}

impl ConversionProxy {
    pub fn new(llm: Arc<dyn StatelessLLMInterface>, system_prompt: impl Into<String>) -> Self {
        Self {
            llm,
            system_prompt: system_prompt.into(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub async fn convert(&self, prompt: &str) -> Result<ConversionResult, ConversionError> {
        let messages = vec![
            ChatMessage::system(self.system_prompt.as_str()),
            ChatMessage::user(prompt),
        ];

        match self.llm.chat_completion(messages).await {
            Ok(text) => {
                debug!("Conversion completed with {}: {} chars", self.llm.model(), text.len());
                Ok(ConversionResult::new(text))
            }
            Err(err) => {
                error!("Provider error: {:?}", err);
                let converted = ConversionError::from(&err);
                if converted.kind == ConversionErrorKind::QuotaExceeded {
                    warn!("Provider quota exhausted for model {}", self.llm.model());
                }
                Err(converted)
            }
        }
    }
}
