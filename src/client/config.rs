use super::i18n::{Locale, Messages};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/api/convert";

/// Settings the client pipeline is constructed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub locale: Locale,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>, locale: Locale) -> Self {
        Self {
            endpoint: endpoint.into(),
            locale,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, Locale::default())
    }
}
