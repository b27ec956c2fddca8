use std::sync::Arc;

use crate::config::Config;
use crate::conversion::ConversionProxy;
use crate::llm::{StatelessLLMFactory, StatelessLLMInterface};

/// Shared, read-only server state; cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub proxy: Arc<ConversionProxy>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let llm = StatelessLLMFactory::create_llm(&config.llm_config)?;
        Ok(Self::with_llm(config, llm))
    }

    /// Build state around an already constructed provider
    pub fn with_llm(config: Config, llm: Arc<dyn StatelessLLMInterface>) -> Self {
        let proxy = ConversionProxy::new(llm, config.llm_config.system_prompt.clone());
        Self {
            config: Arc::new(config),
            proxy: Arc::new(proxy),
        }
    }
}
