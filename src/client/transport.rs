use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::config::ClientConfig;
use super::prompt::Prompt;
use crate::conversion::{
    ConversionError, ConversionErrorKind, ConversionResult, ConvertRequest, ConvertResponse, ErrorBody,
};

/// How the controller reaches the conversion proxy
#[async_trait]
pub trait ConversionTransport: Send + Sync {
    async fn convert(&self, prompt: &Prompt) -> Result<ConversionResult, ConversionError>;
}

/// `POST /api/convert` over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ConversionTransport for HttpTransport {
    async fn convert(&self, prompt: &Prompt) -> Result<ConversionResult, ConversionError> {
        let request = ConvertRequest {
            prompt: prompt.as_str().to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Conversion request to {} failed: {}", self.endpoint, e);
                ConversionError::from_kind(ConversionErrorKind::UpstreamFailure)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read conversion response: {}", e);
            ConversionError::from_kind(ConversionErrorKind::UpstreamFailure)
        })?;
        debug!("Proxy answered {} ({} bytes)", status, body.len());

        read_envelope(status, &body)
    }
}

/// Interpret the proxy's JSON envelope for a given status
pub fn read_envelope(status: u16, body: &str) -> Result<ConversionResult, ConversionError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<ConvertResponse>(body)
            .map(|envelope| ConversionResult::new(envelope.result))
            .map_err(|e| {
                warn!("Unreadable success envelope: {}", e);
                ConversionError::from_kind(ConversionErrorKind::UpstreamFailure)
            });
    }

    let kind = ConversionErrorKind::from_status(status);
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|envelope| envelope.error)
        .unwrap_or_else(|_| kind.default_message().to_string());
    Err(ConversionError::new(kind, message))
}
