//! Conversion failure taxonomy
//!
//! Provider errors are classified into two kinds before they leave the proxy:
//! quota-class failures the caller should retry later, and everything else.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::types::ErrorBody;
use crate::llm::ProviderError;

/// Error codes providers use to report an exhausted quota
pub const QUOTA_ERROR_CODES: &[&str] = &["insufficient_quota"];

pub const QUOTA_EXCEEDED_MESSAGE: &str = "API quota exceeded. Please try again later.";
pub const CONVERSION_FAILED_MESSAGE: &str = "Conversion failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionErrorKind {
    QuotaExceeded,
    UpstreamFailure,
}

impl ConversionErrorKind {
    /// First match wins: explicit quota code, then a "quota" mention in the message.
    pub fn classify(err: &ProviderError) -> Self {
        if err.code().is_some_and(|code| QUOTA_ERROR_CODES.contains(&code)) {
            return Self::QuotaExceeded;
        }
        if err
            .message()
            .is_some_and(|message| message.to_lowercase().contains("quota"))
        {
            return Self::QuotaExceeded;
        }
        Self::UpstreamFailure
    }

    /// Inverse of [`status_code`](Self::status_code) for clients reading the envelope
    pub fn from_status(status: u16) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS.as_u16() {
            Self::QuotaExceeded
        } else {
            Self::UpstreamFailure
        }
    }

    pub fn status_code(self) -> StatusCode {
        match self {
            Self::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            Self::UpstreamFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            Self::QuotaExceeded => QUOTA_EXCEEDED_MESSAGE,
            Self::UpstreamFailure => CONVERSION_FAILED_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConversionError {
    pub kind: ConversionErrorKind,
    pub message: String,
}

impl ConversionError {
    pub fn new(kind: ConversionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn from_kind(kind: ConversionErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }
}

impl From<&ProviderError> for ConversionError {
    fn from(err: &ProviderError) -> Self {
        Self::from_kind(ConversionErrorKind::classify(err))
    }
}

impl IntoResponse for ConversionError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.kind.status_code(), Json(body)).into_response()
    }
}
