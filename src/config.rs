use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use regex::Regex;

/// Environment variable holding the provider credential when the config file leaves it out
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub llm_config: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Upstream provider settings for the conversion proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Empty means the provider's well-known endpoint
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

fn default_provider() -> String {
    "groq_llm".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_system_prompt() -> String {
    "You are a code translator. Only return the converted code. No explanations.".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: String::new(),
            api_key: String::new(),
            model: default_model(),
            temperature: default_temperature(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl LlmConfig {
    /// Fill the credential from the environment when the file did not provide one.
    ///
    /// An unresolved `${VAR}` placeholder counts as missing.
    pub fn apply_env_fallback<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.has_api_key() {
            return;
        }
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
    }

    pub fn has_api_key(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && !key.starts_with("${")
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        let content = substitute_env_vars(&content, |name| std::env::var(name).ok())?;
        Self::parse(path, &content)
    }

    /// Determine file type by extension, YAML otherwise
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let config = match extension.as_deref() {
            Some("json") => serde_json::from_str(content)
                .with_context(|| format!("Invalid JSON configuration: {}", path))?,
            _ => serde_yaml::from_str(content)
                .with_context(|| format!("Invalid YAML configuration: {}", path))?,
        };
        Ok(config)
    }

    /// Startup checks; the pipeline itself never handles a missing credential
    pub fn validate(&self) -> Result<()> {
        if !self.llm_config.has_api_key() {
            anyhow::bail!(
                "No provider API key configured. Set llm_config.api_key or the {} environment variable",
                API_KEY_ENV
            );
        }
        if !(0.0..=2.0).contains(&self.llm_config.temperature) {
            anyhow::bail!("llm_config.temperature must be between 0.0 and 2.0");
        }
        if self.llm_config.model.trim().is_empty() {
            anyhow::bail!("llm_config.model must not be empty");
        }
        Ok(())
    }
}

/// Replace environment variables: ${VAR_NAME}
///
/// Unknown variables are left untouched.
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}
