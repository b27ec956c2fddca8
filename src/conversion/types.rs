use serde::{Deserialize, Serialize};

/// Body of `POST /api/convert`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub prompt: String,
}

/// Success envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub result: String,
}

/// Failure envelope, returned with 429 or 500
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Converted code exactly as the model produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub text: String,
}

impl ConversionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
