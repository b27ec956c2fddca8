/// Top 25 programming languages offered by both pickers, in display order
pub const LANGUAGES: [&str; 25] = [
    "Python",
    "JavaScript",
    "TypeScript",
    "Java",
    "C++",
    "C#",
    "C",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "PHP",
    "Ruby",
    "Scala",
    "R",
    "MATLAB",
    "Perl",
    "Haskell",
    "Lua",
    "Dart",
    "Elixir",
    "F#",
    "Clojure",
    "Objective-C",
    "Visual Basic",
];

/// Fixed, ordered set of selectable language names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageCatalog {
    entries: &'static [&'static str],
}

impl LanguageCatalog {
    pub const fn builtin() -> Self {
        Self { entries: &LANGUAGES }
    }

    pub fn entries(&self) -> &'static [&'static str] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact name first, then a case-insensitive match. Returns the catalog's spelling.
    pub fn find(&self, name: &str) -> Option<&'static str> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|entry| **entry == name)
            .or_else(|| {
                let lowered = name.to_lowercase();
                self.entries.iter().find(|entry| entry.to_lowercase() == lowered)
            })
            .copied()
    }

    /// Entries containing `term`, case-insensitively, in catalog order.
    ///
    /// An empty term matches everything; no match is an empty list.
    pub fn filter(&self, term: &str) -> Vec<&'static str> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .copied()
            .collect()
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
