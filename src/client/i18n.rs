//! UI string tables and locale negotiation.
//!
//! The chosen [`Locale`] travels inside [`ClientConfig`](super::config::ClientConfig);
//! nothing here is process-global.

/// Locales with a string table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EsEs,
}

/// UI strings keyed by what they label
#[derive(Debug)]
pub struct Messages {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub source_language_placeholder: &'static str,
    pub target_language_placeholder: &'static str,
    pub convert_button: &'static str,
    pub converting: &'static str,
    pub source_code_title: &'static str,
    pub converted_code_title: &'static str,
    pub search_languages_placeholder: &'static str,
    pub no_languages_found: &'static str,
    pub error_empty_code: &'static str,
    pub error_conversion_failed: &'static str,
    pub error_quota_exceeded: &'static str,
}

static EN_US: Messages = Messages {
    app_title: "CodeFlux",
    app_subtitle: "Programming Language Converter",
    source_language_placeholder: "Source Language",
    target_language_placeholder: "Target Language",
    convert_button: "Convert Code",
    converting: "Converting...",
    source_code_title: "Source Code",
    converted_code_title: "Converted Code",
    search_languages_placeholder: "Search languages...",
    no_languages_found: "No languages found",
    error_empty_code: "Please enter some code to convert",
    error_conversion_failed: "Failed to convert code. Please try again.",
    error_quota_exceeded: "API quota exceeded. Please try again later.",
};

static ES_ES: Messages = Messages {
    app_title: "CodeFlux",
    app_subtitle: "Convertidor de Lenguajes de Programación",
    source_language_placeholder: "Lenguaje de Origen",
    target_language_placeholder: "Lenguaje de Destino",
    convert_button: "Convertir Código",
    converting: "Convirtiendo...",
    source_code_title: "Código de Origen",
    converted_code_title: "Código Convertido",
    search_languages_placeholder: "Buscar lenguajes...",
    no_languages_found: "No se encontraron lenguajes",
    error_empty_code: "Por favor ingresa código para convertir",
    error_conversion_failed: "Error al convertir el código. Por favor intenta de nuevo.",
    error_quota_exceeded: "Cuota de la API agotada. Por favor intenta más tarde.",
};

impl Locale {
    pub const SUPPORTED: [Locale; 2] = [Locale::EnUs, Locale::EsEs];

    pub fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EsEs => "es-ES",
        }
    }

    /// Pick a locale for a BCP 47 or POSIX tag (`es-MX`, `es_ES.UTF-8`).
    ///
    /// Exact tag first, then the first locale sharing the primary language,
    /// then en-US.
    pub fn negotiate(tag: &str) -> Self {
        let tag = tag.split('.').next().unwrap_or("").trim().replace('_', "-");
        if let Some(exact) = Self::SUPPORTED
            .iter()
            .find(|l| l.tag().eq_ignore_ascii_case(&tag))
        {
            return *exact;
        }

        let language = tag.split('-').next().unwrap_or("").to_ascii_lowercase();
        if language.is_empty() {
            return Self::default();
        }
        Self::SUPPORTED
            .iter()
            .find(|l| l.tag().to_ascii_lowercase().starts_with(&format!("{}-", language)))
            .copied()
            .unwrap_or_default()
    }

    /// An explicit choice wins over the system locale; en-US when neither is known.
    pub fn resolve(explicit: Option<&str>, system: Option<&str>) -> Self {
        explicit
            .or(system)
            .map(Self::negotiate)
            .unwrap_or_default()
    }

    /// [`resolve`](Self::resolve) against the operating system's preferred locale
    pub fn detect(explicit: Option<&str>) -> Self {
        Self::resolve(explicit, sys_locale::get_locale().as_deref())
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Self::EnUs => &EN_US,
            Self::EsEs => &ES_ES,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
