use serde_json::Value;

/// Errors raised at the provider boundary.
///
/// Whatever shape the upstream error body has, it is normalized here so the
/// rest of the crate never has to probe loosely-typed JSON.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        code: Option<String>,
        error_type: Option<String>,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Build an API error from a non-success response body.
    ///
    /// OpenAI-compatible providers answer with `{"error": {"message", "type", "code"}}`.
    /// Bodies that are not JSON keep their raw text as the message.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_error_value(status, &value),
            Err(_) => {
                let text = body.trim();
                Self::Api {
                    status,
                    code: None,
                    error_type: None,
                    message: (!text.is_empty()).then(|| text.to_string()),
                }
            }
        }
    }

    pub fn from_error_value(status: u16, value: &Value) -> Self {
        // Some gateways put the error object at the top level
        let error = value.get("error").unwrap_or(value);

        let message = match error {
            Value::String(s) => Some(s.clone()),
            _ => error
                .get("message")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
        };

        Self::Api {
            status,
            code: error.get("code").and_then(field_to_string),
            error_type: error
                .get("type")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            message,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

fn field_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
