use tracing::{debug, info, warn};

use super::config::ClientConfig;
use super::prompt::{self, ConversionRequest, Prompt};
use super::transport::ConversionTransport;
use crate::conversion::{ConversionError, ConversionErrorKind, ConversionResult};

/// Why the last attempt did not produce code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Blank input, resolved locally without a network call
    Validation(String),
    Conversion(ConversionError),
}

impl Failure {
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) => message,
            Self::Conversion(err) => &err.message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversionState {
    #[default]
    Idle,
    Converting,
    Succeeded(ConversionResult),
    Failed(Failure),
}

impl ConversionState {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Converting)
    }

    /// Text for the converted-code panel; empty unless the last attempt succeeded
    pub fn converted_code(&self) -> &str {
        match self {
            Self::Succeeded(result) => &result.text,
            _ => "",
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(failure) => Some(failure.message()),
            _ => None,
        }
    }
}

/// Outcome of starting a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Now converting; send this prompt and report back through `finish`
    Dispatch(Prompt),
    /// Blank input; state is now a validation failure
    Rejected,
    /// A conversion is already in flight; nothing changed
    Busy,
}

/// Owns the conversion lifecycle for one UI session.
///
/// `begin` and `finish` are the two halves of the state machine and can be
/// driven separately by an event loop; `submit` runs both around one
/// transport call.
pub struct ConversionController<T: ConversionTransport> {
    transport: T,
    config: ClientConfig,
    state: ConversionState,
}

impl<T: ConversionTransport> ConversionController<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self {
            transport,
            config,
            state: ConversionState::Idle,
        }
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request in the configured locale
    pub fn request(
        &self,
        source_code: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> ConversionRequest {
        ConversionRequest::new(source_code, source_language, target_language, self.config.locale)
    }

    pub fn begin(&mut self, request: &ConversionRequest) -> Submission {
        if self.state.is_busy() {
            debug!("Ignoring submit while a conversion is in flight");
            return Submission::Busy;
        }

        if request.is_blank() {
            let message = self.config.messages().error_empty_code;
            self.state = ConversionState::Failed(Failure::Validation(message.to_string()));
            return Submission::Rejected;
        }

        info!(
            "Converting {} -> {} ({} chars)",
            request.source_language,
            request.target_language,
            request.source_code.len()
        );
        self.state = ConversionState::Converting;
        Submission::Dispatch(prompt::build_for(request))
    }

    pub fn finish(&mut self, outcome: Result<ConversionResult, ConversionError>) {
        if !self.state.is_busy() {
            warn!("Dropping conversion outcome with no conversion in flight");
            return;
        }

        self.state = match outcome {
            Ok(result) => ConversionState::Succeeded(result),
            Err(err) => {
                warn!("Conversion failed: {:?}", err.kind);
                ConversionState::Failed(Failure::Conversion(self.localize(err)))
            }
        };
    }

    pub async fn submit(&mut self, request: ConversionRequest) -> &ConversionState {
        if let Submission::Dispatch(prompt) = self.begin(&request) {
            let outcome = self.transport.convert(&prompt).await;
            self.finish(outcome);
        }
        &self.state
    }

    fn localize(&self, err: ConversionError) -> ConversionError {
        let messages = self.config.messages();
        let message = match err.kind {
            ConversionErrorKind::QuotaExceeded => messages.error_quota_exceeded,
            ConversionErrorKind::UpstreamFailure => messages.error_conversion_failed,
        };
        ConversionError::new(err.kind, message)
    }
}
