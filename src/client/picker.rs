use tracing::debug;

use super::catalog::LanguageCatalog;

/// Everything the presentation layer can do to a picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Open,
    Close,
    Toggle,
    Search(String),
    Select(String),
    /// Interaction outside the picker's boundary
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

/// Searchable single-select over the language catalog.
///
/// Closing, for any reason, clears the search term. Source and target
/// pickers are separate instances and may hold the same language.
#[derive(Debug, Clone)]
pub struct LanguagePicker {
    catalog: LanguageCatalog,
    is_open: bool,
    search_term: String,
    selected: &'static str,
}

impl LanguagePicker {
    pub fn new(catalog: LanguageCatalog, initial: &str) -> Result<Self, PickerError> {
        let selected = catalog
            .find(initial)
            .ok_or_else(|| PickerError::UnknownLanguage(initial.to_string()))?;
        Ok(Self {
            catalog,
            is_open: false,
            search_term: String::new(),
            selected,
        })
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected(&self) -> &'static str {
        self.selected
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.search_term.clear();
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Typing into the search box; the box only exists while open
    pub fn search(&mut self, term: impl Into<String>) {
        self.is_open = true;
        self.search_term = term.into();
    }

    pub fn filter(&self, term: &str) -> Vec<&'static str> {
        self.catalog.filter(term)
    }

    /// Options currently listed under the search box
    pub fn visible(&self) -> Vec<&'static str> {
        self.filter(&self.search_term)
    }

    pub fn select(&mut self, language: &str) -> Result<(), PickerError> {
        let language = self
            .catalog
            .find(language)
            .ok_or_else(|| PickerError::UnknownLanguage(language.to_string()))?;
        if language != self.selected {
            debug!("Language selected: {} -> {}", self.selected, language);
        }
        self.selected = language;
        self.close();
        Ok(())
    }

    pub fn dismiss(&mut self) {
        if self.is_open {
            self.close();
        }
    }

    pub fn apply(&mut self, event: PickerEvent) -> Result<(), PickerError> {
        match event {
            PickerEvent::Open => self.open(),
            PickerEvent::Close => self.close(),
            PickerEvent::Toggle => self.toggle(),
            PickerEvent::Search(term) => self.search(term),
            PickerEvent::Select(language) => return self.select(&language),
            PickerEvent::Dismiss => self.dismiss(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker(initial: &str) -> LanguagePicker {
        LanguagePicker::new(LanguageCatalog::builtin(), initial).unwrap()
    }

    #[test]
    fn starts_closed_with_initial_selection() {
        let p = picker("Python");
        assert!(!p.is_open());
        assert_eq!(p.search_term(), "");
        assert_eq!(p.selected(), "Python");
    }

    #[test]
    fn unknown_initial_language_is_rejected() {
        let err = LanguagePicker::new(LanguageCatalog::builtin(), "Cobol").unwrap_err();
        assert_eq!(err, PickerError::UnknownLanguage("Cobol".to_string()));
    }

    #[test]
    fn closing_clears_search_term() {
        let mut p = picker("Python");
        p.search("scr");
        assert!(p.is_open());
        assert_eq!(p.visible(), vec!["JavaScript", "TypeScript"]);

        p.close();
        assert!(!p.is_open());
        assert_eq!(p.search_term(), "");
        assert_eq!(p.visible().len(), 25);
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut p = picker("Python");
        p.toggle();
        assert!(p.is_open());
        p.search("ru");
        p.toggle();
        assert!(!p.is_open());
        assert_eq!(p.search_term(), "");
    }

    #[test]
    fn select_closes_and_clears() {
        let mut p = picker("Python");
        p.search("type");
        p.select("TypeScript").unwrap();
        assert_eq!(p.selected(), "TypeScript");
        assert!(!p.is_open());
        assert_eq!(p.search_term(), "");
    }

    #[test]
    fn select_is_idempotent() {
        let mut p = picker("Go");
        p.select("Go").unwrap();
        p.select("Go").unwrap();
        assert_eq!(p.selected(), "Go");
        assert!(!p.is_open());
    }

    #[test]
    fn select_unknown_leaves_state_untouched() {
        let mut p = picker("Go");
        p.search("co");
        assert!(p.select("Cobol").is_err());
        assert_eq!(p.selected(), "Go");
        assert!(p.is_open());
        assert_eq!(p.search_term(), "co");
    }

    #[test]
    fn dismiss_closes_open_picker() {
        let mut p = picker("Go");
        p.search("java");
        p.dismiss();
        assert!(!p.is_open());
        assert_eq!(p.search_term(), "");

        p.dismiss();
        assert!(!p.is_open());
    }

    #[test]
    fn empty_search_result_is_a_valid_state() {
        let mut p = picker("Go");
        p.search("zzz");
        assert!(p.is_open());
        assert!(p.visible().is_empty());
    }

    #[test]
    fn events_drive_the_same_transitions() {
        let mut p = picker("Python");
        p.apply(PickerEvent::Open).unwrap();
        p.apply(PickerEvent::Search("kot".to_string())).unwrap();
        assert_eq!(p.visible(), vec!["Kotlin"]);
        p.apply(PickerEvent::Select("Kotlin".to_string())).unwrap();
        assert_eq!(p.selected(), "Kotlin");
        assert!(!p.is_open());

        p.apply(PickerEvent::Toggle).unwrap();
        p.apply(PickerEvent::Dismiss).unwrap();
        assert!(!p.is_open());

        assert!(p.apply(PickerEvent::Select("Klingon".to_string())).is_err());
    }

    #[test]
    fn source_and_target_may_match() {
        let mut source = picker("Python");
        let mut target = picker("JavaScript");
        source.select("Rust").unwrap();
        target.select("Rust").unwrap();
        assert_eq!(source.selected(), target.selected());
    }
}
