use std::sync::Arc;
use tracing::info;
use anyhow::Result;

use crate::config::LlmConfig;
use crate::llm::interface::StatelessLLMInterface;
use crate::llm::openai_compatible::OpenAICompatibleLLM;

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create an LLM based on the configuration.
    ///
    /// # Arguments
    /// * `config` - LLM section of the server configuration
    pub fn create_llm(config: &LlmConfig) -> Result<Arc<dyn StatelessLLMInterface>> {
        info!("Initializing LLM: {}", config.provider);

        let base_url = if config.base_url.trim().is_empty() {
            Self::default_base_url(&config.provider)
                .ok_or_else(|| anyhow::anyhow!("No base_url configured for provider: {}", config.provider))?
                .to_string()
        } else {
            config.base_url.clone()
        };

        match config.provider.as_str() {
            "openai_compatible_llm" | "openai_llm" | "groq_llm" | "deepseek_llm"
            | "mistral_llm" | "gemini_llm" => Ok(Arc::new(OpenAICompatibleLLM::new(
                config.model.clone(),
                base_url,
                config.api_key.clone(),
                config.temperature,
            ))),
            _ => Err(anyhow::anyhow!("Unsupported LLM provider: {}", config.provider)),
        }
    }

    fn default_base_url(provider: &str) -> Option<&'static str> {
        match provider {
            "groq_llm" => Some("https://api.groq.com/openai/v1"),
            "openai_llm" => Some("https://api.openai.com/v1"),
            "deepseek_llm" => Some("https://api.deepseek.com/v1"),
            "mistral_llm" => Some("https://api.mistral.ai/v1"),
            "gemini_llm" => Some("https://generativelanguage.googleapis.com/v1beta/openai"),
            _ => None,
        }
    }
}
