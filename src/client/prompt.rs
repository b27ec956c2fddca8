use std::fmt;

use super::i18n::Locale;

/// What the user asked to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source_code: String,
    pub source_language: String,
    pub target_language: String,
    pub locale: Locale,
}

impl ConversionRequest {
    pub fn new(
        source_code: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        locale: Locale,
    ) -> Self {
        Self {
            source_code: source_code.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
            locale,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.source_code.trim().is_empty()
    }
}

/// Instruction string sent to the proxy; discarded after the call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn build(source_code: &str, source_language: &str, target_language: &str, locale: Locale) -> Prompt {
    Prompt(format!(
        "Convert the following {} code to {}. Only return the converted code without any explanation or markdown formatting. Please respond in {} language:\n\n{}",
        source_language,
        target_language,
        locale.tag(),
        source_code
    ))
}

pub fn build_for(request: &ConversionRequest) -> Prompt {
    build(
        &request.source_code,
        &request.source_language,
        &request.target_language,
        request.locale,
    )
}
